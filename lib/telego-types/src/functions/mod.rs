// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The remote methods of the Bot API, one `struct` per method.
//!
//! Each function has a `new` constructor taking its required parameters,
//! and one chainable setter per optional parameter:
//!
//! ```
//! use telego_types::functions::SendMessage;
//! use telego_types::types::ParseMode;
//!
//! let request = SendMessage::new(1234, "*hello*")
//!     .parse_mode(ParseMode::Markdown)
//!     .disable_notification(true);
//! ```
//!
//! Optional parameters left unset are not sent at all.
use crate::MissingParam;
use crate::types::ChatId;

/// Implements one setter per optional field, named after the field, which
/// sets its value and returns the request back.
macro_rules! optional_params {
    ($ty:ident { $($(#[$doc:meta])* $field:ident: $value:ty),+ $(,)? }) => {
        impl $ty {
            $(
                $(#[$doc])*
                pub fn $field<T: Into<$value>>(mut self, $field: T) -> Self {
                    self.$field = Some($field.into());
                    self
                }
            )+
        }
    };
}

fn check_chat(chat_id: &ChatId) -> Result<(), MissingParam> {
    MissingParam::check(!chat_id.is_empty(), "chat_id")
}

fn check_str(value: &str, name: &'static str) -> Result<(), MissingParam> {
    MissingParam::check(!value.is_empty(), name)
}

fn check_id(value: i64, name: &'static str) -> Result<(), MissingParam> {
    MissingParam::check(value != 0, name)
}

fn check_user(user_id: i64) -> Result<(), MissingParam> {
    check_id(user_id, "user_id")
}

mod bots;
mod chats;
mod files;
mod games;
mod messages;
mod updates;
mod users;

pub use bots::{AnswerCallbackQuery, AnswerInlineQuery};
pub use chats::{
    GetChat, GetChatAdministrators, GetChatMember, GetChatMembersCount, KickChatMember, LeaveChat,
    UnbanChatMember,
};
pub use files::GetFile;
pub use games::{GetGameHighScores, MessageTarget, SendGame, SetGameScore};
pub use messages::{
    ForwardMessage, SendAudio, SendChatAction, SendContact, SendDocument, SendLocation,
    SendMessage, SendPhoto, SendSticker, SendVenue, SendVideo, SendVoice,
};
pub use updates::{DeleteWebhook, GetUpdates, GetWebhookInfo, SetWebhook};
pub use users::{GetMe, GetUserProfilePhotos};
