// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{check_id, check_str, check_user};
use crate::types::{GameHighScore, GameScoreResult, InlineKeyboardMarkup, Message};
use crate::{MissingParam, RemoteCall};
use serde::Serialize;

/// The message containing a game, either sent by the bot or via the bot in inline mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageTarget {
    Chat { chat_id: i64, message_id: i64 },
    Inline { inline_message_id: String },
}

impl MessageTarget {
    pub fn chat(chat_id: i64, message_id: i64) -> Self {
        Self::Chat {
            chat_id,
            message_id,
        }
    }

    pub fn inline<I: Into<String>>(inline_message_id: I) -> Self {
        Self::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }

    fn validate(&self) -> Result<(), MissingParam> {
        match self {
            Self::Chat {
                chat_id,
                message_id,
            } => {
                check_id(*chat_id, "chat_id")?;
                check_id(*message_id, "message_id")
            }
            Self::Inline { inline_message_id } => {
                check_str(inline_message_id, "inline_message_id")
            }
        }
    }
}

/// Sends a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendGame {
    /// Games can only be sent to chats by their numeric identifier.
    pub chat_id: i64,
    /// Short name of the game, serves as the unique identifier for the game.
    pub game_short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    /// If empty, one "Play game_title" button will be shown. If not empty,
    /// the first button must launch the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendGame {
    pub fn new<G: Into<String>>(chat_id: i64, game_short_name: G) -> Self {
        Self {
            chat_id,
            game_short_name: game_short_name.into(),
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

optional_params!(SendGame {
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: InlineKeyboardMarkup,
});

impl RemoteCall for SendGame {
    const METHOD: &'static str = "sendGame";
    type Return = Message;

    fn validate(&self) -> Result<(), MissingParam> {
        check_id(self.chat_id, "chat_id")?;
        check_str(&self.game_short_name, "game_short_name")
    }
}

/// Sets the score of the specified user in a game.
///
/// Fails if the new score is not greater than the user's current score in
/// the chat, unless `force` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetGameScore {
    pub user_id: i64,
    /// New score, must be non-negative.
    pub score: i64,
    #[serde(flatten)]
    pub target: MessageTarget,
    /// Allow the high score to decrease, which can be useful when fixing
    /// mistakes or banning cheaters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    /// Don't edit the game message to include the current scoreboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_edit_message: Option<bool>,
}

impl SetGameScore {
    pub fn new(user_id: i64, score: i64, target: MessageTarget) -> Self {
        Self {
            user_id,
            score,
            target,
            force: None,
            disable_edit_message: None,
        }
    }
}

optional_params!(SetGameScore {
    force: bool,
    disable_edit_message: bool,
});

impl RemoteCall for SetGameScore {
    const METHOD: &'static str = "setGameScore";
    type Return = GameScoreResult;

    fn validate(&self) -> Result<(), MissingParam> {
        check_user(self.user_id)?;
        self.target.validate()
    }
}

/// Returns the high score table of a game, for the specified user and
/// several of their neighbors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetGameHighScores {
    pub user_id: i64,
    #[serde(flatten)]
    pub target: MessageTarget,
}

impl GetGameHighScores {
    pub fn new(user_id: i64, target: MessageTarget) -> Self {
        Self { user_id, target }
    }
}

impl RemoteCall for GetGameHighScores {
    const METHOD: &'static str = "getGameHighScores";
    type Return = Vec<GameHighScore>;

    fn validate(&self) -> Result<(), MissingParam> {
        check_user(self.user_id)?;
        self.target.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_game_required_params() {
        assert_eq!(
            SendGame::new(0, "chess").validate(),
            Err(MissingParam { name: "chat_id" })
        );
        assert_eq!(
            SendGame::new(5, "").validate(),
            Err(MissingParam {
                name: "game_short_name"
            })
        );
        assert_eq!(SendGame::new(5, "chess").validate(), Ok(()));
    }

    #[test]
    fn score_target_is_flattened() {
        let request = SetGameScore::new(7, 120, MessageTarget::chat(5, 99)).force(true);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"user_id": 7, "score": 120, "chat_id": 5, "message_id": 99, "force": true})
        );

        let request = GetGameHighScores::new(7, MessageTarget::inline("AAEC"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"user_id": 7, "inline_message_id": "AAEC"})
        );
    }

    #[test]
    fn score_target_required_params() {
        assert_eq!(
            SetGameScore::new(0, 1, MessageTarget::chat(5, 99)).validate(),
            Err(MissingParam { name: "user_id" })
        );
        assert_eq!(
            SetGameScore::new(7, 1, MessageTarget::chat(5, 0)).validate(),
            Err(MissingParam { name: "message_id" })
        );
        assert_eq!(
            GetGameHighScores::new(7, MessageTarget::inline("")).validate(),
            Err(MissingParam {
                name: "inline_message_id"
            })
        );
        assert_eq!(
            GetGameHighScores::new(7, MessageTarget::chat(5, 99)).validate(),
            Ok(())
        );
    }
}
