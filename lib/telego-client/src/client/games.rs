// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to games.

use super::Client;
use telego_sender::InvocationError;
use telego_types::functions::{GetGameHighScores, MessageTarget, SendGame, SetGameScore};
use telego_types::types::{GameHighScore, GameScoreResult, Message};

impl Client {
    /// Send a game. Games can only be sent to private chats and groups.
    pub async fn send_game(&self, request: SendGame) -> Result<Message, InvocationError> {
        self.invoke(&request).await
    }

    /// Set the score of a user in a game.
    ///
    /// If the game message was sent by the bot, the edited message is returned. Otherwise the
    /// result is just a confirmation.
    pub async fn set_game_score(
        &self,
        request: SetGameScore,
    ) -> Result<GameScoreResult, InvocationError> {
        self.invoke(&request).await
    }

    /// Fetch the high scores of a game around the given user.
    pub async fn get_game_high_scores(
        &self,
        user_id: i64,
        target: MessageTarget,
    ) -> Result<Vec<GameHighScore>, InvocationError> {
        self.invoke(&GetGameHighScores::new(user_id, target)).await
    }
}
