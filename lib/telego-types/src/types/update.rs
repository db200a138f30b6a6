// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{ChosenInlineResult, InlineQuery, Message, PreCheckoutQuery, ShippingQuery, User};
use serde::{Deserialize, Serialize};

/// An incoming update. At most one of the optional fields is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// The update's unique identifier.
    ///
    /// Identifiers increase sequentially, so the next call to `getUpdates`
    /// should use an offset one greater than the highest identifier seen.
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_query: Option<ShippingQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_checkout_query: Option<PreCheckoutQuery>,
}

/// A borrowed view over whichever payload an [`Update`] carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    EditedMessage(&'a Message),
    ChannelPost(&'a Message),
    EditedChannelPost(&'a Message),
    InlineQuery(&'a InlineQuery),
    ChosenInlineResult(&'a ChosenInlineResult),
    CallbackQuery(&'a CallbackQuery),
    ShippingQuery(&'a ShippingQuery),
    PreCheckoutQuery(&'a PreCheckoutQuery),
}

impl Update {
    /// The payload of this update, or `None` if it carries a kind unknown to this library.
    pub fn kind(&self) -> Option<UpdateKind<'_>> {
        if let Some(message) = &self.message {
            Some(UpdateKind::Message(message))
        } else if let Some(message) = &self.edited_message {
            Some(UpdateKind::EditedMessage(message))
        } else if let Some(message) = &self.channel_post {
            Some(UpdateKind::ChannelPost(message))
        } else if let Some(message) = &self.edited_channel_post {
            Some(UpdateKind::EditedChannelPost(message))
        } else if let Some(query) = &self.inline_query {
            Some(UpdateKind::InlineQuery(query))
        } else if let Some(result) = &self.chosen_inline_result {
            Some(UpdateKind::ChosenInlineResult(result))
        } else if let Some(query) = &self.callback_query {
            Some(UpdateKind::CallbackQuery(query))
        } else if let Some(query) = &self.shipping_query {
            Some(UpdateKind::ShippingQuery(query))
        } else {
            self.pre_checkout_query
                .as_ref()
                .map(UpdateKind::PreCheckoutQuery)
        }
    }
}

/// An incoming callback query from a button of an inline keyboard.
///
/// If the button that originated the query was attached to a message sent by
/// the bot, `message` will be present. If it was attached to a message sent
/// via the bot in inline mode, `inline_message_id` will be present instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    /// Global identifier uniquely corresponding to the chat the message was sent to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Short name of the game to be returned, when the button was a game button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

/// The current status of a webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Webhook URL, empty if no webhook is set up.
    pub url: String,
    pub has_custom_certificate: bool,
    /// Number of updates awaiting delivery.
    pub pending_update_count: i32,
    /// Unix time of the most recent error that happened when trying to deliver an update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_update() {
        let input = json!({
            "update_id": 10000,
            "message": {
                "message_id": 1365,
                "date": 1441645532,
                "chat": {"id": 1111111, "type": "private", "first_name": "Test"},
                "from": {"id": 1111111, "first_name": "Test", "last_name": "Lastname"},
                "text": "/start"
            }
        });
        let update: Update = serde_json::from_value(input.clone()).unwrap();
        assert!(matches!(update.kind(), Some(UpdateKind::Message(m)) if m.message_id == 1365));
        assert_eq!(serde_json::to_value(&update).unwrap(), input);
    }

    #[test]
    fn callback_query_update() {
        let input = json!({
            "update_id": 10001,
            "callback_query": {
                "id": "4382bfdwdsb323b2d9",
                "from": {"id": 1111111, "first_name": "Test"},
                "inline_message_id": "1234csdbsk4839",
                "data": "next_page"
            }
        });
        let update: Update = serde_json::from_value(input.clone()).unwrap();
        match update.kind() {
            Some(UpdateKind::CallbackQuery(query)) => {
                assert_eq!(query.data.as_deref(), Some("next_page"));
                assert_eq!(query.message, None);
            }
            other => panic!("unexpected update kind: {other:?}"),
        }
        assert_eq!(serde_json::to_value(&update).unwrap(), input);
    }

    #[test]
    fn unknown_update_has_no_kind() {
        let update: Update =
            serde_json::from_value(json!({"update_id": 7, "poll": {"id": "1"}})).unwrap();
        assert_eq!(update.kind(), None);
    }

    #[test]
    fn webhook_info_round_trip() {
        let input = json!({
            "url": "https://example.com/hook",
            "has_custom_certificate": false,
            "pending_update_count": 3,
            "last_error_date": 1500000000,
            "last_error_message": "Connection refused",
            "allowed_updates": ["message", "callback_query"]
        });
        let info: WebhookInfo = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(info.max_connections, None);
        assert_eq!(serde_json::to_value(&info).unwrap(), input);
    }
}
