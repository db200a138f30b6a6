// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{
    Audio, Chat, Contact, Document, Game, Invoice, Location, PhotoSize, Sticker,
    SuccessfulPayment, User, Venue, Video, Voice,
};
use serde::{Deserialize, Serialize};

/// A message.
///
/// Only one of the media fields (`audio`, `document`, `photo`, …) or service
/// fields (`new_chat_member`, `pinned_message`, …) is normally present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Date the message was sent in Unix time.
    pub date: i64,
    pub chat: Chat,
    /// Sender, empty for messages sent to channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_from: Option<User>,
    /// For messages forwarded from a channel, information about the original channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_from_chat: Option<Chat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_from_message_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_date: Option<i64>,
    /// The original message, if this one is a reply. It will not contain
    /// further `reply_to_message` fields even if it itself is a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Special entities like usernames, URLs, bot commands, etc. that appear in the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
    /// Available sizes of the photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    /// Caption for the document, photo or video, 0-200 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_chat_member: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_chat_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_chat_photo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_chat_created: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supergroup_chat_created: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_chat_created: Option<bool>,
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// The supergroup has been migrated from a group with this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_from_chat_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    /// The message is an invoice for a payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    /// Service message about a successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successful_payment: Option<SuccessfulPayment>,
}

impl Message {
    /// The text of the message, or its caption if it has media instead.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }

    /// The bot command this message starts with, if any, without the leading
    /// slash nor the `@botname` suffix.
    pub fn command(&self) -> Option<&str> {
        let entity = self.entities.as_ref()?.first()?;
        if entity.kind != "bot_command" || entity.offset != 0 {
            return None;
        }
        let text = self.text.as_deref()?;
        let command = text.get(1..entity.length as usize)?;
        Some(command.split('@').next().unwrap_or(command))
    }
}

/// One special entity in a text message, such as a hashtag, a username or a URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    /// Type of the entity: `mention`, `hashtag`, `bot_command`, `url`, `email`,
    /// `bold`, `italic`, `code`, `pre`, `text_link` or `text_mention`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: i32,
    /// Length of the entity in UTF-16 code units.
    pub length: i32,
    /// For `text_link` only, the URL that will be opened after the user taps on the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// For `text_mention` only, the mentioned user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// How the text of an outgoing message should be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

/// The kind of activity to broadcast with `sendChatAction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_message() -> serde_json::Value {
        json!({
            "message_id": 1365,
            "date": 1483916424,
            "chat": {"id": 1111, "type": "private", "first_name": "Ann"},
            "from": {"id": 1111, "first_name": "Ann", "username": "ann"},
            "text": "/start@telego_bot now",
            "entities": [{"type": "bot_command", "offset": 0, "length": 17}]
        })
    }

    #[test]
    fn text_message_round_trip() {
        let input = text_message();
        let message: Message = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(message.message_id, 1365);
        assert_eq!(message.photo, None);
        assert_eq!(message.reply_to_message, None);
        assert_eq!(serde_json::to_value(&message).unwrap(), input);
    }

    #[test]
    fn nested_reply_round_trip() {
        let mut input = text_message();
        input["reply_to_message"] = text_message();
        input["reply_to_message"]["message_id"] = json!(1364);
        let message: Message = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(
            message.reply_to_message.as_ref().map(|m| m.message_id),
            Some(1364)
        );
        assert_eq!(serde_json::to_value(&message).unwrap(), input);
    }

    #[test]
    fn command_extraction() {
        let message: Message = serde_json::from_value(text_message()).unwrap();
        assert_eq!(message.command(), Some("start"));

        let mut plain = message.clone();
        plain.entities = None;
        assert_eq!(plain.command(), None);
    }

    #[test]
    fn text_or_caption() {
        let mut message: Message = serde_json::from_value(text_message()).unwrap();
        message.text = None;
        assert_eq!(message.text_or_caption(), None);
        message.caption = Some("a cat".into());
        assert_eq!(message.text_or_caption(), Some("a cat"));
    }

    #[test]
    fn parse_mode_and_action_names() {
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
        assert_eq!(
            serde_json::to_value(ParseMode::Markdown).unwrap(),
            json!("Markdown")
        );
        assert_eq!(
            serde_json::to_value(ChatAction::UploadDocument).unwrap(),
            json!("upload_document")
        );
    }
}
