// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Telegram user or bot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// The user's full name, joining the first and last name if both are present.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {}", self.first_name, last_name),
            None => self.first_name.clone(),
        }
    }
}

/// The kind of a [`Chat`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
    /// A kind unknown to this library, kept as sent by the server.
    #[serde(untagged)]
    Other(String),
}

/// A chat, which may be a private conversation, a group, or a channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Unique identifier for this chat. It may be larger than 32 bits, but
    /// it always fits in a signed 64-bit integer.
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    /// Title, for supergroups, channels and group chats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// First name of the other party in a private chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_members_are_administrators: Option<bool>,
}

/// The target chat of a request: either its numeric identifier, or the
/// username of a channel or supergroup (in the format `@channelusername`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// Whether this identifier can't possibly refer to any chat.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Id(id) => *id == 0,
            Self::Username(username) => username.is_empty(),
        }
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(username) => write!(f, "{username}"),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        Self::Id(id.into())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<&Chat> for ChatId {
    fn from(chat: &Chat) -> Self {
        Self::Id(chat.id)
    }
}

/// The status of a member in a chat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Left,
    Kicked,
    /// A status unknown to this library, such as `restricted`.
    #[serde(untagged)]
    Other(String),
}

/// Information about one member of a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMember {
    pub user: User,
    pub status: ChatMemberStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_omits_absent_fields() {
        let input = json!({"id": 7, "first_name": "Ann"});
        let user: User = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(user.last_name, None);
        assert_eq!(user.username, None);
        assert_eq!(serde_json::to_value(&user).unwrap(), input);
    }

    #[test]
    fn chat_kind_uses_type_key() {
        let input = json!({
            "id": -1001234567890i64,
            "type": "supergroup",
            "title": "Rustaceans",
            "username": "rustaceans"
        });
        let chat: Chat = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(chat.id, -1001234567890);
        assert_eq!(chat.kind, ChatKind::Supergroup);
        assert_eq!(serde_json::to_value(&chat).unwrap(), input);
    }

    #[test]
    fn unknown_chat_kind_is_kept() {
        let input = json!({"id": 5, "type": "forum"});
        let chat: Chat = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(chat.kind, ChatKind::Other("forum".into()));
        assert_eq!(serde_json::to_value(&chat).unwrap(), input);
    }

    #[test]
    fn unknown_member_status_is_kept() {
        let input = json!({
            "user": {"id": 7, "first_name": "Ann"},
            "status": "restricted"
        });
        let member: ChatMember = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(member.status, ChatMemberStatus::Other("restricted".into()));
        assert_eq!(serde_json::to_value(&member).unwrap(), input);

        let member: ChatMember = serde_json::from_value(json!({
            "user": {"id": 7, "first_name": "Ann"},
            "status": "kicked"
        }))
        .unwrap();
        assert_eq!(member.status, ChatMemberStatus::Kicked);
    }

    #[test]
    fn chat_id_is_untagged() {
        assert_eq!(serde_json::to_value(ChatId::from(42)).unwrap(), json!(42));
        assert_eq!(
            serde_json::to_value(ChatId::from("@channel")).unwrap(),
            json!("@channel")
        );
        assert!(ChatId::Id(0).is_empty());
        assert!(ChatId::from("").is_empty());
        assert!(!ChatId::from("@channel").is_empty());
    }

    #[test]
    fn full_name() {
        let mut user = User {
            id: 1,
            first_name: "Ann".into(),
            last_name: None,
            username: None,
        };
        assert_eq!(user.full_name(), "Ann");
        user.last_name = Some("Lee".into());
        assert_eq!(user.full_name(), "Ann Lee");
    }
}
