// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The objects exchanged with the Bot API.
//!
//! Required fields are plain values, while optional fields are wrapped in
//! [`Option`] and skipped when serializing if they are `None`, so that a
//! decoded object serializes back into the same JSON it came from.
mod chat;
mod games;
mod inline;
mod media;
mod message;
mod payments;
mod reply_markup;
mod update;

pub use chat::{Chat, ChatId, ChatKind, ChatMember, ChatMemberStatus, User};
pub use games::{CallbackGame, Game, GameHighScore, GameScoreResult};
pub use inline::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultAudio, InlineQueryResultCachedAudio, InlineQueryResultCachedDocument,
    InlineQueryResultCachedGif, InlineQueryResultCachedMpeg4Gif, InlineQueryResultCachedPhoto,
    InlineQueryResultCachedSticker, InlineQueryResultCachedVideo, InlineQueryResultCachedVoice,
    InlineQueryResultContact, InlineQueryResultDocument, InlineQueryResultGame,
    InlineQueryResultGif, InlineQueryResultLocation, InlineQueryResultMpeg4Gif,
    InlineQueryResultPhoto, InlineQueryResultVenue, InlineQueryResultVideo,
    InlineQueryResultVoice, InputContactMessageContent, InputLocationMessageContent,
    InputMessageContent, InputTextMessageContent, InputVenueMessageContent,
};
pub use media::{
    Animation, Audio, Contact, Document, File, Location, PhotoSize, Sticker, UserProfilePhotos,
    Venue, Video, Voice,
};
pub use message::{ChatAction, Message, MessageEntity, ParseMode};
pub use payments::{
    Invoice, OrderInfo, PreCheckoutQuery, ShippingAddress, ShippingQuery, SuccessfulPayment,
};
pub use reply_markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};
pub use update::{CallbackQuery, Update, UpdateKind, WebhookInfo};
