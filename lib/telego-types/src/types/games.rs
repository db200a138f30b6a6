// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Animation, Message, MessageEntity, PhotoSize, User};
use serde::{Deserialize, Serialize};

/// A game. Games are created and edited through BotFather, and their short
/// names act as unique identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    /// Photo that will be displayed in the game message in chats.
    pub photo: Vec<PhotoSize>,
    /// Brief description of the game or high scores included in the game message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// A placeholder, currently holds no information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// One row of the high scores table for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHighScore {
    pub position: i32,
    pub user: User,
    pub score: i64,
}

/// The result of setting a game score.
///
/// If the game message was sent by the bot, the edited message is returned,
/// otherwise, the result is simply `true`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameScoreResult {
    Edited(Box<Message>),
    Done(bool),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn game_round_trip() {
        let input = json!({
            "title": "Lumberjack",
            "description": "Chop wood",
            "photo": [{"file_id": "p", "width": 640, "height": 360}],
            "animation": {"file_id": "anim", "file_name": "intro.mp4", "mime_type": "video/mp4"}
        });
        let game: Game = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(game.text, None);
        assert_eq!(serde_json::to_value(&game).unwrap(), input);
    }

    #[test]
    fn score_result_variants() {
        let done: GameScoreResult = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(done, GameScoreResult::Done(true));

        let edited: GameScoreResult = serde_json::from_value(json!({
            "message_id": 3,
            "date": 0,
            "chat": {"id": 5, "type": "private"}
        }))
        .unwrap();
        assert!(matches!(edited, GameScoreResult::Edited(m) if m.message_id == 3));
    }
}
