// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Types used by bots in inline mode.
//!
//! Every kind of inline result serializes its own `type` tag, so they can
//! be mixed freely inside a single [`InlineQueryResult`] list. Results
//! referring to a file already stored on Telegram's servers use the same tag
//! as their URL-based counterpart, and are told apart by their file
//! identifier field instead.
use super::{InlineKeyboardMarkup, Location, ParseMode, User};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An incoming inline query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    /// Sender location, only for bots that request user location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub query: String,
    /// Offset of the results to be returned, can be controlled by the bot.
    pub offset: String,
}

/// A result of an inline query that was chosen by the user and sent to their chat partner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Only available if there is an inline keyboard attached to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub query: String,
}

/// Content of a text message to be sent as the result of an inline query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// The content of a message to be sent as a result of an inline query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    // Venues are a superset of locations and must be tried first.
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
}

impl InputMessageContent {
    /// Plain text content, with no parse mode.
    pub fn text<T: Into<String>>(text: T) -> Self {
        Self::Text(InputTextMessageContent {
            message_text: text.into(),
            ..Default::default()
        })
    }
}

/// A link to an article or web page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "article")]
pub struct InlineQueryResultArticle {
    /// Unique identifier for this result, 1-64 bytes.
    pub id: String,
    pub title: String,
    pub input_message_content: InputMessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_url: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<i32>,
}

impl Default for InputMessageContent {
    fn default() -> Self {
        Self::Text(InputTextMessageContent::default())
    }
}

/// A link to a JPEG photo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "photo")]
pub struct InlineQueryResultPhoto {
    pub id: String,
    pub photo_url: String,
    pub thumb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to an animated GIF file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "gif")]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    pub thumb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a video animation (H.264/MPEG-4 AVC video without sound).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "mpeg4_gif")]
pub struct InlineQueryResultMpeg4Gif {
    pub id: String,
    pub mpeg4_url: String,
    pub thumb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a page containing an embedded video player or a video file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "video")]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,
    /// Either `text/html` or `video/mp4`.
    pub mime_type: String,
    pub thumb_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to an MP3 audio file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "audio")]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a voice recording in an OGG container encoded with OPUS.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "voice")]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a file, either a PDF or a ZIP archive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "document")]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    pub document_url: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<i32>,
}

/// A location on a map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "location")]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "venue")]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<i32>,
}

/// A contact with a phone number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "contact")]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "game")]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "photo")]
pub struct InlineQueryResultCachedPhoto {
    pub id: String,
    pub photo_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "gif")]
pub struct InlineQueryResultCachedGif {
    pub id: String,
    pub gif_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "mpeg4_gif")]
pub struct InlineQueryResultCachedMpeg4Gif {
    pub id: String,
    pub mpeg4_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "sticker")]
pub struct InlineQueryResultCachedSticker {
    pub id: String,
    pub sticker_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "document")]
pub struct InlineQueryResultCachedDocument {
    pub id: String,
    pub title: String,
    pub document_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "video")]
pub struct InlineQueryResultCachedVideo {
    pub id: String,
    pub video_file_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "voice")]
pub struct InlineQueryResultCachedVoice {
    pub id: String,
    pub voice_file_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "audio")]
pub struct InlineQueryResultCachedAudio {
    pub id: String,
    pub audio_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// One result of an inline query.
///
/// Decoding dispatches on the `type` tag. A `photo`, `gif`, `mpeg4_gif`, `video`, `audio`,
/// `voice` or `document` result carrying a file identifier decodes as its cached kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Video(InlineQueryResultVideo),
    Audio(InlineQueryResultAudio),
    Voice(InlineQueryResultVoice),
    Document(InlineQueryResultDocument),
    Location(InlineQueryResultLocation),
    Venue(InlineQueryResultVenue),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    CachedAudio(InlineQueryResultCachedAudio),
}

macro_rules! impl_from_result {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for InlineQueryResult {
                fn from(result: $ty) -> Self {
                    Self::$variant(result)
                }
            }
        )+
    };
}

impl_from_result! {
    Article => InlineQueryResultArticle,
    Photo => InlineQueryResultPhoto,
    Gif => InlineQueryResultGif,
    Mpeg4Gif => InlineQueryResultMpeg4Gif,
    Video => InlineQueryResultVideo,
    Audio => InlineQueryResultAudio,
    Voice => InlineQueryResultVoice,
    Document => InlineQueryResultDocument,
    Location => InlineQueryResultLocation,
    Venue => InlineQueryResultVenue,
    Contact => InlineQueryResultContact,
    Game => InlineQueryResultGame,
    CachedPhoto => InlineQueryResultCachedPhoto,
    CachedGif => InlineQueryResultCachedGif,
    CachedMpeg4Gif => InlineQueryResultCachedMpeg4Gif,
    CachedSticker => InlineQueryResultCachedSticker,
    CachedDocument => InlineQueryResultCachedDocument,
    CachedVideo => InlineQueryResultCachedVideo,
    CachedVoice => InlineQueryResultCachedVoice,
    CachedAudio => InlineQueryResultCachedAudio,
}

const RESULT_KINDS: &[&str] = &[
    "article",
    "photo",
    "gif",
    "mpeg4_gif",
    "video",
    "audio",
    "voice",
    "document",
    "location",
    "venue",
    "contact",
    "game",
    "sticker",
];

fn decode_result<T: DeserializeOwned, E: de::Error>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?
            .to_owned();

        // Cached results name their file identifier after the kind.
        let file_id = match kind.as_str() {
            "mpeg4_gif" => "mpeg4_file_id".to_string(),
            kind => format!("{kind}_file_id"),
        };
        let cached = value.get(&file_id).is_some();

        Ok(match kind.as_str() {
            "article" => Self::Article(decode_result(value)?),
            "photo" if cached => Self::CachedPhoto(decode_result(value)?),
            "photo" => Self::Photo(decode_result(value)?),
            "gif" if cached => Self::CachedGif(decode_result(value)?),
            "gif" => Self::Gif(decode_result(value)?),
            "mpeg4_gif" if cached => Self::CachedMpeg4Gif(decode_result(value)?),
            "mpeg4_gif" => Self::Mpeg4Gif(decode_result(value)?),
            "video" if cached => Self::CachedVideo(decode_result(value)?),
            "video" => Self::Video(decode_result(value)?),
            "audio" if cached => Self::CachedAudio(decode_result(value)?),
            "audio" => Self::Audio(decode_result(value)?),
            "voice" if cached => Self::CachedVoice(decode_result(value)?),
            "voice" => Self::Voice(decode_result(value)?),
            "document" if cached => Self::CachedDocument(decode_result(value)?),
            "document" => Self::Document(decode_result(value)?),
            "location" => Self::Location(decode_result(value)?),
            "venue" => Self::Venue(decode_result(value)?),
            "contact" => Self::Contact(decode_result(value)?),
            "game" => Self::Game(decode_result(value)?),
            "sticker" => Self::CachedSticker(decode_result(value)?),
            other => return Err(de::Error::unknown_variant(other, RESULT_KINDS)),
        })
    }
}

impl InlineQueryResult {
    /// The unique identifier of this result.
    pub fn id(&self) -> &str {
        match self {
            Self::Article(r) => &r.id,
            Self::Photo(r) => &r.id,
            Self::Gif(r) => &r.id,
            Self::Mpeg4Gif(r) => &r.id,
            Self::Video(r) => &r.id,
            Self::Audio(r) => &r.id,
            Self::Voice(r) => &r.id,
            Self::Document(r) => &r.id,
            Self::Location(r) => &r.id,
            Self::Venue(r) => &r.id,
            Self::Contact(r) => &r.id,
            Self::Game(r) => &r.id,
            Self::CachedPhoto(r) => &r.id,
            Self::CachedGif(r) => &r.id,
            Self::CachedMpeg4Gif(r) => &r.id,
            Self::CachedSticker(r) => &r.id,
            Self::CachedDocument(r) => &r.id,
            Self::CachedVideo(r) => &r.id,
            Self::CachedVoice(r) => &r.id,
            Self::CachedAudio(r) => &r.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn article_carries_type_tag() {
        let result: InlineQueryResult = InlineQueryResultArticle {
            id: "1".into(),
            title: "Hello".into(),
            input_message_content: InputMessageContent::text("Hello, world!"),
            ..Default::default()
        }
        .into();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "type": "article",
                "id": "1",
                "title": "Hello",
                "input_message_content": {"message_text": "Hello, world!"}
            })
        );
    }

    #[test]
    fn every_kind_round_trips() {
        let content = json!({"message_text": "hi"});
        let cases = [
            (
                "Article",
                json!({
                    "type": "article",
                    "id": "1",
                    "title": "T",
                    "input_message_content": content,
                }),
            ),
            (
                "Photo",
                json!({
                    "type": "photo",
                    "id": "2",
                    "photo_url": "https://x/p.jpg",
                    "thumb_url": "https://x/t.jpg",
                    "title": "T",
                }),
            ),
            (
                "Gif",
                json!({
                    "type": "gif",
                    "id": "3",
                    "gif_url": "https://x/g.gif",
                    "thumb_url": "https://x/t.jpg",
                }),
            ),
            (
                "Mpeg4Gif",
                json!({
                    "type": "mpeg4_gif",
                    "id": "4",
                    "mpeg4_url": "https://x/m.mp4",
                    "thumb_url": "https://x/t.jpg",
                }),
            ),
            (
                "Video",
                json!({
                    "type": "video",
                    "id": "5",
                    "video_url": "https://x/v.mp4",
                    "mime_type": "video/mp4",
                    "thumb_url": "https://x/t.jpg",
                    "title": "T",
                    "input_message_content": content,
                }),
            ),
            (
                "Audio",
                json!({
                    "type": "audio",
                    "id": "6",
                    "audio_url": "https://x/a.mp3",
                    "title": "T",
                    "performer": "P",
                }),
            ),
            (
                "Voice",
                json!({"type": "voice", "id": "7", "voice_url": "https://x/v.ogg", "title": "T"}),
            ),
            (
                "Document",
                json!({
                    "type": "document",
                    "id": "8",
                    "title": "T",
                    "document_url": "https://x/d.pdf",
                    "mime_type": "application/pdf",
                    "input_message_content": content,
                }),
            ),
            (
                "Location",
                json!({
                    "type": "location",
                    "id": "9",
                    "latitude": 1.5,
                    "longitude": 2.5,
                    "title": "T",
                    "input_message_content": content,
                }),
            ),
            (
                "Venue",
                json!({
                    "type": "venue",
                    "id": "v1",
                    "latitude": 1.0,
                    "longitude": 2.0,
                    "title": "Sol",
                    "address": "Madrid",
                    "input_message_content": content,
                }),
            ),
            (
                "Contact",
                json!({
                    "type": "contact",
                    "id": "10",
                    "phone_number": "+34600000000",
                    "first_name": "Ann",
                }),
            ),
            (
                "Game",
                json!({"type": "game", "id": "11", "game_short_name": "tetris"}),
            ),
            (
                "CachedPhoto",
                json!({"type": "photo", "id": "12", "photo_file_id": "AgAD", "title": "T"}),
            ),
            (
                "CachedGif",
                json!({"type": "gif", "id": "13", "gif_file_id": "CgAD"}),
            ),
            (
                "CachedMpeg4Gif",
                json!({"type": "mpeg4_gif", "id": "14", "mpeg4_file_id": "CgAE"}),
            ),
            (
                "CachedSticker",
                json!({"type": "sticker", "id": "15", "sticker_file_id": "CAAD"}),
            ),
            (
                "CachedDocument",
                json!({
                    "type": "document",
                    "id": "16",
                    "title": "T",
                    "document_file_id": "BQAD",
                    "input_message_content": content,
                }),
            ),
            (
                "CachedVideo",
                json!({"type": "video", "id": "17", "video_file_id": "BAAD", "title": "T"}),
            ),
            (
                "CachedVoice",
                json!({"type": "voice", "id": "18", "voice_file_id": "AwAD", "title": "T"}),
            ),
            (
                "CachedAudio",
                json!({"type": "audio", "id": "19", "audio_file_id": "CQAD", "caption": "C"}),
            ),
        ];

        for (variant, input) in cases {
            let result: InlineQueryResult = serde_json::from_value(input.clone()).unwrap();
            let debug = format!("{result:?}");
            assert!(
                debug.starts_with(&format!("{variant}(")),
                "{input} decoded as {debug}"
            );
            assert_eq!(result.id(), input["id"]);
            assert_eq!(serde_json::to_value(&result).unwrap(), input);
        }
    }

    #[test]
    fn unknown_or_missing_kind_is_rejected() {
        let unknown =
            serde_json::from_value::<InlineQueryResult>(json!({"type": "poll", "id": "1"}));
        assert!(unknown.is_err());

        let untagged = serde_json::from_value::<InlineQueryResult>(
            json!({"id": "1", "game_short_name": "tetris"}),
        );
        assert!(untagged.is_err());
    }

    #[test]
    fn venue_content_is_not_mistaken_for_location() {
        let content: InputMessageContent = serde_json::from_value(json!({
            "latitude": 40.4168,
            "longitude": -3.7038,
            "title": "Puerta del Sol",
            "address": "Madrid"
        }))
        .unwrap();
        assert!(matches!(content, InputMessageContent::Venue(_)));

        let content: InputMessageContent =
            serde_json::from_value(json!({"latitude": 1.0, "longitude": 2.0})).unwrap();
        assert!(matches!(content, InputMessageContent::Location(_)));
    }

    #[test]
    fn inline_query_round_trip() {
        let input = json!({
            "id": "134567",
            "from": {"id": 1111111, "first_name": "Test"},
            "query": "cats",
            "offset": ""
        });
        let query: InlineQuery = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(query.location, None);
        assert_eq!(serde_json::to_value(&query).unwrap(), input);
    }
}
