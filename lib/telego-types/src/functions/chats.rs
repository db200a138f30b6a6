// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to query and manage chats and their members.
//!
//! Kicking and unbanning only work if the bot is an administrator of the
//! group, supergroup or channel.
use super::{check_chat, check_user};
use crate::types::{Chat, ChatId, ChatMember};
use crate::{MissingParam, RemoteCall};
use serde::Serialize;

/// Kicks a user from a group, supergroup or channel.
///
/// In supergroups and channels, the user will not be able to return on
/// their own using invite links, unless unbanned first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KickChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl KickChatMember {
    pub fn new<C: Into<ChatId>>(chat_id: C, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

impl RemoteCall for KickChatMember {
    const METHOD: &'static str = "kickChatMember";
    type Return = bool;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_user(self.user_id)
    }
}

/// Makes the bot leave a group, supergroup or channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl LeaveChat {
    pub fn new<C: Into<ChatId>>(chat_id: C) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl RemoteCall for LeaveChat {
    const METHOD: &'static str = "leaveChat";
    type Return = bool;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)
    }
}

/// Unbans a previously kicked user in a supergroup or channel.
///
/// The user will not return to the group automatically, but will be able
/// to join via link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl UnbanChatMember {
    pub fn new<C: Into<ChatId>>(chat_id: C, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

impl RemoteCall for UnbanChatMember {
    const METHOD: &'static str = "unbanChatMember";
    type Return = bool;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_user(self.user_id)
    }
}

/// Returns up-to-date information about a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl GetChat {
    pub fn new<C: Into<ChatId>>(chat_id: C) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl RemoteCall for GetChat {
    const METHOD: &'static str = "getChat";
    type Return = Chat;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)
    }
}

/// Returns the administrators in a chat, other than bots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl GetChatAdministrators {
    pub fn new<C: Into<ChatId>>(chat_id: C) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl RemoteCall for GetChatAdministrators {
    const METHOD: &'static str = "getChatAdministrators";
    type Return = Vec<ChatMember>;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)
    }
}

/// Returns the number of members in a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetChatMembersCount {
    pub chat_id: ChatId,
}

impl GetChatMembersCount {
    pub fn new<C: Into<ChatId>>(chat_id: C) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl RemoteCall for GetChatMembersCount {
    const METHOD: &'static str = "getChatMembersCount";
    type Return = i32;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)
    }
}

/// Returns information about one member of a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl GetChatMember {
    pub fn new<C: Into<ChatId>>(chat_id: C, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

impl RemoteCall for GetChatMember {
    const METHOD: &'static str = "getChatMember";
    type Return = ChatMember;

    fn validate(&self) -> Result<(), MissingParam> {
        check_chat(&self.chat_id)?;
        check_user(self.user_id)
    }
}
