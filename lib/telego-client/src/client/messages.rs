// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending messages.

use super::Client;
use telego_sender::InvocationError;
use telego_types::functions::{
    ForwardMessage, SendAudio, SendChatAction, SendContact, SendDocument, SendLocation,
    SendMessage, SendPhoto, SendSticker, SendVenue, SendVideo, SendVoice,
};
use telego_types::types::{ChatAction, ChatId, Message};

impl Client {
    /// Send a text message.
    ///
    /// Optional parameters, such as the parse mode or the reply markup, are set on the request.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telego_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use telego_client::functions::SendMessage;
    /// use telego_client::types::ParseMode;
    ///
    /// let message = client
    ///     .send_message(SendMessage::new(1234, "*bold*").parse_mode(ParseMode::Markdown))
    ///     .await?;
    ///
    /// println!("sent message {}", message.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message(&self, request: SendMessage) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Forward a message from one chat into another.
    pub async fn forward_message<C: Into<ChatId>, F: Into<ChatId>>(
        &self,
        chat_id: C,
        from_chat_id: F,
        message_id: i64,
    ) -> Result<Message, InvocationError> {
        self.invoke(&ForwardMessage::new(chat_id, from_chat_id, message_id))
            .await
    }

    /// Send a photo, by file identifier or by URL.
    pub async fn send_photo(&self, request: SendPhoto) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send an audio file to be shown in the music player.
    pub async fn send_audio(&self, request: SendAudio) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send a general file.
    pub async fn send_document(&self, request: SendDocument) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send a `.webp` sticker.
    pub async fn send_sticker(&self, request: SendSticker) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send an MP4 video.
    pub async fn send_video(&self, request: SendVideo) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send an audio file to be shown as a playable voice note.
    pub async fn send_voice(&self, request: SendVoice) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send a point on the map.
    pub async fn send_location(&self, request: SendLocation) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send a named place on the map, with its address.
    pub async fn send_venue(&self, request: SendVenue) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Send a phone contact.
    pub async fn send_contact(&self, request: SendContact) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Tell the users in a chat that the bot is doing something, such as typing.
    ///
    /// The status is cleared after a few seconds, or as soon as the bot sends a message.
    pub async fn send_chat_action<C: Into<ChatId>>(
        &self,
        chat_id: C,
        action: ChatAction,
    ) -> Result<bool, InvocationError> {
        self.invoke(&SendChatAction::new(chat_id, action)).await
    }
}
