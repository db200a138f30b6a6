// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::check_str;
use crate::types::InlineQueryResult;
use crate::{MissingParam, RemoteCall};
use serde::Serialize;

/// Sends an answer to a callback query sent from an inline keyboard.
///
/// The answer is displayed to the user as a notification at the top of the
/// chat screen or as an alert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    /// Text of the notification, 0-200 characters. Nothing is shown if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    /// URL that will be opened by the user's client, such as a game URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Maximum amount of time in seconds that the result may be cached client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i32>,
}

impl AnswerCallbackQuery {
    pub fn new<Q: Into<String>>(callback_query_id: Q) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }
}

optional_params!(AnswerCallbackQuery {
    text: String,
    show_alert: bool,
    url: String,
    cache_time: i32,
});

impl RemoteCall for AnswerCallbackQuery {
    const METHOD: &'static str = "answerCallbackQuery";
    type Return = bool;

    fn validate(&self) -> Result<(), MissingParam> {
        check_str(&self.callback_query_id, "callback_query_id")
    }
}

/// Sends answers to an inline query. No more than 50 results per query are allowed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    /// Always sent, even if empty, which shows no results to the user.
    pub results: Vec<InlineQueryResult>,
    /// Maximum amount of time in seconds that the result may be cached on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,
    /// Offset that the client should send in the next query with the same text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
    /// Text of a button that switches the user to a private chat with the bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_pm_text: Option<String>,
    /// Deep-linking parameter for the `/start` message sent after the switch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_pm_parameter: Option<String>,
}

impl AnswerInlineQuery {
    pub fn new<Q, I, R>(inline_query_id: Q, results: I) -> Self
    where
        Q: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<InlineQueryResult>,
    {
        Self {
            inline_query_id: inline_query_id.into(),
            results: results.into_iter().map(Into::into).collect(),
            cache_time: None,
            is_personal: None,
            next_offset: None,
            switch_pm_text: None,
            switch_pm_parameter: None,
        }
    }
}

optional_params!(AnswerInlineQuery {
    cache_time: i32,
    is_personal: bool,
    next_offset: String,
    switch_pm_text: String,
    switch_pm_parameter: String,
});

impl RemoteCall for AnswerInlineQuery {
    const METHOD: &'static str = "answerInlineQuery";
    type Return = bool;

    fn validate(&self) -> Result<(), MissingParam> {
        check_str(&self.inline_query_id, "inline_query_id")
    }
}
