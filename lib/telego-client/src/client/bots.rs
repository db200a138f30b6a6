// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to answer the queries users make to the bot.

use super::Client;
use telego_sender::InvocationError;
use telego_types::functions::{AnswerCallbackQuery, AnswerInlineQuery};

impl Client {
    /// Answer a press on an inline keyboard button.
    ///
    /// The query must be answered even if there is nothing to show, or the button of the user
    /// will keep displaying a progress bar.
    pub async fn answer_callback_query(
        &self,
        request: AnswerCallbackQuery,
    ) -> Result<bool, InvocationError> {
        self.invoke(&request).await
    }

    /// Answer an inline query with up to 50 results.
    ///
    /// # Examples
    ///
    /// ```
    /// use telego_client::Client;
    /// use telego_client::functions::AnswerInlineQuery;
    /// use telego_client::types::{InlineQuery, InlineQueryResultArticle, InputMessageContent};
    ///
    /// # async fn f(client: Client, query: InlineQuery) -> Result<(), Box<dyn std::error::Error>> {
    /// let article = InlineQueryResultArticle {
    ///     id: "1".to_string(),
    ///     title: "Echo".to_string(),
    ///     input_message_content: InputMessageContent::text(query.query.clone()),
    ///     ..Default::default()
    /// };
    ///
    /// client
    ///     .answer_inline_query(AnswerInlineQuery::new(query.id, [article]).cache_time(0))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn answer_inline_query(
        &self,
        request: AnswerInlineQuery,
    ) -> Result<bool, InvocationError> {
        self.invoke(&request).await
    }
}
