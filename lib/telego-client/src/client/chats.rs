// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to groups, supergroups and channels.

use super::Client;
use telego_sender::InvocationError;
use telego_types::functions::{
    GetChat, GetChatAdministrators, GetChatMember, GetChatMembersCount, KickChatMember,
    LeaveChat, UnbanChatMember,
};
use telego_types::types::{Chat, ChatId, ChatMember};

impl Client {
    /// Kick a user from a group or channel.
    ///
    /// In supergroups and channels the user is also banned, and cannot come back until
    /// [`Client::unban_chat_member`] is used. The bot must be an administrator.
    pub async fn kick_chat_member<C: Into<ChatId>>(
        &self,
        chat_id: C,
        user_id: i64,
    ) -> Result<bool, InvocationError> {
        self.invoke(&KickChatMember::new(chat_id, user_id)).await
    }

    /// Leave a group, supergroup or channel.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telego_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// client.leave_chat("@some_channel").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn leave_chat<C: Into<ChatId>>(&self, chat_id: C) -> Result<bool, InvocationError> {
        self.invoke(&LeaveChat::new(chat_id)).await
    }

    /// Lift the ban of a previously kicked user in a supergroup or channel.
    pub async fn unban_chat_member<C: Into<ChatId>>(
        &self,
        chat_id: C,
        user_id: i64,
    ) -> Result<bool, InvocationError> {
        self.invoke(&UnbanChatMember::new(chat_id, user_id)).await
    }

    /// Fetch up-to-date information about a chat.
    pub async fn get_chat<C: Into<ChatId>>(&self, chat_id: C) -> Result<Chat, InvocationError> {
        self.invoke(&GetChat::new(chat_id)).await
    }

    /// Fetch the administrators of a chat, other bots excluded.
    pub async fn get_chat_administrators<C: Into<ChatId>>(
        &self,
        chat_id: C,
    ) -> Result<Vec<ChatMember>, InvocationError> {
        self.invoke(&GetChatAdministrators::new(chat_id)).await
    }

    /// Fetch the number of members in a chat.
    pub async fn get_chat_members_count<C: Into<ChatId>>(
        &self,
        chat_id: C,
    ) -> Result<i32, InvocationError> {
        self.invoke(&GetChatMembersCount::new(chat_id)).await
    }

    /// Fetch the membership of a user in a chat.
    pub async fn get_chat_member<C: Into<ChatId>>(
        &self,
        chat_id: C,
        user_id: i64,
    ) -> Result<ChatMember, InvocationError> {
        self.invoke(&GetChatMember::new(chat_id, user_id)).await
    }
}
