// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reply markups usable by bots when sending messages.
//!
//! Each markup has a constructor taking a matrix of buttons, that is, a
//! vector containing the rows from top to bottom, where the rows consist
//! of a vector of buttons from left to right.
use super::CallbackGame;
use serde::{Deserialize, Serialize};

/// A custom keyboard with reply options, replacing the user's own keyboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    /// Request clients to resize the keyboard vertically for optimal fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    /// Request clients to hide the keyboard as soon as it's been used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    /// Show the keyboard to specific users only: those mentioned in the text,
    /// and the sender of the message being replied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// One button of the reply keyboard.
///
/// The optional fields are mutually exclusive. With none of them, the text
/// of the button is sent as a message when pressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
}

/// Removes the current custom keyboard and displays the default one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true`.
    pub remove_keyboard: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// An inline keyboard that appears right next to the message it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// One button of an inline keyboard. Exactly one of the optional fields must be used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Data to be sent in a callback query to the bot when the button is pressed, 1-64 bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
    /// Description of the game that will be launched when the user presses the button.
    /// Must always be the first button in the first row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_game: Option<CallbackGame>,
}

/// Forces Telegram clients to display a reply interface to the user, as if
/// they had selected the bot's message and tapped "Reply".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true`.
    pub force_reply: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// Any of the markups that may be attached to an outgoing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl ReplyKeyboardMarkup {
    pub fn new<B: Into<Vec<Vec<KeyboardButton>>>>(buttons: B) -> Self {
        Self {
            keyboard: buttons.into(),
            resize_keyboard: None,
            one_time_keyboard: None,
            selective: None,
        }
    }

    pub fn resize(mut self, resize: bool) -> Self {
        self.resize_keyboard = Some(resize);
        self
    }

    pub fn one_time(mut self, one_time: bool) -> Self {
        self.one_time_keyboard = Some(one_time);
        self
    }

    pub fn selective(mut self, selective: bool) -> Self {
        self.selective = Some(selective);
        self
    }
}

impl KeyboardButton {
    /// A button which sends its own text when pressed.
    pub fn text<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            request_contact: None,
            request_location: None,
        }
    }

    /// A button which sends the user's phone number when pressed.
    /// Only available in private chats.
    pub fn request_contact<T: Into<String>>(text: T) -> Self {
        Self {
            request_contact: Some(true),
            ..Self::text(text)
        }
    }

    /// A button which sends the user's current location when pressed.
    /// Only available in private chats.
    pub fn request_location<T: Into<String>>(text: T) -> Self {
        Self {
            request_location: Some(true),
            ..Self::text(text)
        }
    }
}

impl ReplyKeyboardRemove {
    pub fn new() -> Self {
        Self {
            remove_keyboard: true,
            selective: None,
        }
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineKeyboardMarkup {
    pub fn new<B: Into<Vec<Vec<InlineKeyboardButton>>>>(buttons: B) -> Self {
        Self {
            inline_keyboard: buttons.into(),
        }
    }
}

impl From<InlineKeyboardButton> for InlineKeyboardMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        Self::new(vec![vec![button]])
    }
}

impl InlineKeyboardButton {
    fn bare(text: String) -> Self {
        Self {
            text,
            url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
        }
    }

    /// A button that sends a callback query with `data` to the bot when pressed.
    pub fn callback<T: Into<String>, D: Into<String>>(text: T, data: D) -> Self {
        Self {
            callback_data: Some(data.into()),
            ..Self::bare(text.into())
        }
    }

    /// A button that asks the user to open the URL when pressed.
    pub fn url<T: Into<String>, U: Into<String>>(text: T, url: U) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::bare(text.into())
        }
    }

    /// A button that prompts the user to select a chat and inserts the bot's
    /// username and `query` in the input field.
    pub fn switch_inline<T: Into<String>, Q: Into<String>>(text: T, query: Q) -> Self {
        Self {
            switch_inline_query: Some(query.into()),
            ..Self::bare(text.into())
        }
    }

    /// Like [`InlineKeyboardButton::switch_inline`], but stays in the current chat.
    pub fn switch_inline_current_chat<T: Into<String>, Q: Into<String>>(text: T, query: Q) -> Self {
        Self {
            switch_inline_query_current_chat: Some(query.into()),
            ..Self::bare(text.into())
        }
    }

    /// A button that launches the game attached to the message.
    pub fn game<T: Into<String>>(text: T) -> Self {
        Self {
            callback_game: Some(CallbackGame {}),
            ..Self::bare(text.into())
        }
    }
}

impl ForceReply {
    pub fn new() -> Self {
        Self {
            force_reply: true,
            selective: None,
        }
    }
}

impl Default for ForceReply {
    fn default() -> Self {
        Self::new()
    }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        Self::Remove(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_keyboard_json() {
        let markup: ReplyMarkup = InlineKeyboardMarkup::new(vec![
            vec![InlineKeyboardButton::callback("Yes", "y")],
            vec![
                InlineKeyboardButton::url("Docs", "https://core.telegram.org/bots/api"),
                InlineKeyboardButton::game("Play"),
            ],
        ])
        .into();

        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({"inline_keyboard": [
                [{"text": "Yes", "callback_data": "y"}],
                [
                    {"text": "Docs", "url": "https://core.telegram.org/bots/api"},
                    {"text": "Play", "callback_game": {}}
                ]
            ]})
        );
    }

    #[test]
    fn keyboard_json() {
        let markup: ReplyMarkup = ReplyKeyboardMarkup::new(vec![vec![
            KeyboardButton::text("Hi"),
            KeyboardButton::request_location("Where am I?"),
        ]])
        .one_time(true)
        .into();

        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({
                "keyboard": [[{"text": "Hi"}, {"text": "Where am I?", "request_location": true}]],
                "one_time_keyboard": true
            })
        );
    }

    #[test]
    fn untagged_markups_decode_to_their_kind() {
        let remove: ReplyMarkup =
            serde_json::from_value(json!({"remove_keyboard": true})).unwrap();
        assert_eq!(remove, ReplyMarkup::Remove(ReplyKeyboardRemove::new()));

        let force: ReplyMarkup =
            serde_json::from_value(json!({"force_reply": true, "selective": true})).unwrap();
        assert_eq!(
            force,
            ReplyMarkup::ForceReply(ForceReply {
                force_reply: true,
                selective: Some(true),
            })
        );
    }
}
