// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to send messages.
//!
//! Media can be sent by passing the `file_id` of a file that already exists
//! on Telegram's servers, or an HTTP URL for Telegram to get the file from.
use super::{check_chat, check_id, check_str};
use crate::types::{ChatAction, ChatId, Message, ParseMode, ReplyMarkup};
use crate::{MissingParam, RemoteCall};
use serde::Serialize;

/// Sends a text message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    /// Text of the message to be sent, 1-4096 characters.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    /// Sends the message silently.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new<C: Into<ChatId>, T: Into<String>>(chat_id: C, text: T) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendMessage {
    parse_mode: ParseMode,
    disable_web_page_preview: bool,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendMessage {
    const METHOD: &'static str = "sendMessage";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.text, "text")
    }
}

/// Forwards a message of any kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    /// Chat where the original message was sent.
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl ForwardMessage {
    pub fn new<C: Into<ChatId>, F: Into<ChatId>>(
        chat_id: C,
        from_chat_id: F,
        message_id: i64,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }
}

optional_params!(ForwardMessage {
    disable_notification: bool,
});

impl RemoteCall for ForwardMessage {
    const METHOD: &'static str = "forwardMessage";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        MissingParam::check(!self.from_chat_id.is_empty(), "from_chat_id")?;
        check_id(self.message_id, "message_id")
    }
}

/// Sends a photo.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    pub photo: String,
    /// Photo caption, 0-200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPhoto {
    pub fn new<C: Into<ChatId>, P: Into<String>>(chat_id: C, photo: P) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo: photo.into(),
            caption: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendPhoto {
    caption: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendPhoto {
    const METHOD: &'static str = "sendPhoto";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.photo, "photo")
    }
}

/// Sends an audio file to be displayed in the music player.
///
/// The audio must be in the MP3 format. For voice notes, use [`SendVoice`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendAudio {
    pub chat_id: ChatId,
    pub audio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Duration of the audio in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAudio {
    pub fn new<C: Into<ChatId>, A: Into<String>>(chat_id: C, audio: A) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio: audio.into(),
            caption: None,
            duration: None,
            performer: None,
            title: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendAudio {
    caption: String,
    duration: i32,
    performer: String,
    title: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendAudio {
    const METHOD: &'static str = "sendAudio";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.audio, "audio")
    }
}

/// Sends a general file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendDocument {
    pub chat_id: ChatId,
    pub document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDocument {
    pub fn new<C: Into<ChatId>, D: Into<String>>(chat_id: C, document: D) -> Self {
        Self {
            chat_id: chat_id.into(),
            document: document.into(),
            caption: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendDocument {
    caption: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendDocument {
    const METHOD: &'static str = "sendDocument";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.document, "document")
    }
}

/// Sends a `.webp` sticker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendSticker {
    pub chat_id: ChatId,
    pub sticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendSticker {
    pub fn new<C: Into<ChatId>, S: Into<String>>(chat_id: C, sticker: S) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker: sticker.into(),
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendSticker {
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendSticker {
    const METHOD: &'static str = "sendSticker";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.sticker, "sticker")
    }
}

/// Sends an MP4 video file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVideo {
    pub chat_id: ChatId,
    pub video: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVideo {
    pub fn new<C: Into<ChatId>, V: Into<String>>(chat_id: C, video: V) -> Self {
        Self {
            chat_id: chat_id.into(),
            video: video.into(),
            duration: None,
            width: None,
            height: None,
            caption: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendVideo {
    duration: i32,
    width: i32,
    height: i32,
    caption: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendVideo {
    const METHOD: &'static str = "sendVideo";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.video, "video")
    }
}

/// Sends an OGG file encoded with OPUS, to be displayed as a playable voice message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVoice {
    pub chat_id: ChatId,
    pub voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVoice {
    pub fn new<C: Into<ChatId>, V: Into<String>>(chat_id: C, voice: V) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice: voice.into(),
            caption: None,
            duration: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendVoice {
    caption: String,
    duration: i32,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendVoice {
    const METHOD: &'static str = "sendVoice";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.voice, "voice")
    }
}

/// Sends a point on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendLocation {
    pub fn new<C: Into<ChatId>>(chat_id: C, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendLocation {
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendLocation {
    const METHOD: &'static str = "sendLocation";
    type Return = Message;

    // (0, 0) is a valid point, so the coordinates are always sent.
    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)
    }
}

/// Sends information about a venue.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVenue {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVenue {
    pub fn new<C: Into<ChatId>, T: Into<String>, A: Into<String>>(
        chat_id: C,
        latitude: f64,
        longitude: f64,
        title: T,
        address: A,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendVenue {
    foursquare_id: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendVenue {
    const METHOD: &'static str = "sendVenue";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.title, "title")?;
        check_str(&self.address, "address")
    }
}

/// Sends a phone contact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendContact {
    pub fn new<C: Into<ChatId>, P: Into<String>, F: Into<String>>(
        chat_id: C,
        phone_number: P,
        first_name: F,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendContact {
    last_name: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
});

impl RemoteCall for SendContact {
    const METHOD: &'static str = "sendContact";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_str(&self.phone_number, "phone_number")?;
        check_str(&self.first_name, "first_name")
    }
}

/// Tells the user that something is happening on the bot's side.
///
/// The status is set for 5 seconds or less (when a message arrives from the
/// bot, clients clear its typing status).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action: ChatAction,
}

impl SendChatAction {
    pub fn new<C: Into<ChatId>>(chat_id: C, action: ChatAction) -> Self {
        Self {
            chat_id: chat_id.into(),
            action,
        }
    }
}

impl RemoteCall for SendChatAction {
    const METHOD: &'static str = "sendChatAction";
    type Return = bool;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)
    }
}
