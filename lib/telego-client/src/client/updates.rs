// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to deal with and offer access to updates.

use super::Client;
use telego_sender::InvocationError;
use telego_types::functions::{DeleteWebhook, GetUpdates, GetWebhookInfo, SetWebhook};
use telego_types::types::{Update, WebhookInfo};

impl Client {
    /// Fetch the incoming updates through long polling.
    ///
    /// Updates are kept by the server until they are confirmed, which happens when this method
    /// is called with an offset greater than their identifier. This method does not work while
    /// a webhook is set.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telego_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use telego_client::functions::GetUpdates;
    ///
    /// let mut offset = 0;
    /// loop {
    ///     let updates = client
    ///         .get_updates(GetUpdates::new().offset(offset).timeout(30))
    ///         .await?;
    ///
    ///     for update in updates {
    ///         offset = update.update_id + 1;
    ///         println!("{:?}", update.kind());
    ///     }
    /// }
    /// # }
    /// ```
    pub async fn get_updates(&self, request: GetUpdates) -> Result<Vec<Update>, InvocationError> {
        self.invoke(&request).await
    }

    /// Have the updates delivered to the given HTTPS URL instead.
    ///
    /// An empty URL removes the webhook, same as [`Client::delete_webhook`].
    pub async fn set_webhook(&self, request: SetWebhook) -> Result<bool, InvocationError> {
        self.invoke(&request).await
    }

    /// Remove the webhook, if any, so that updates can be fetched with long polling again.
    pub async fn delete_webhook(&self) -> Result<bool, InvocationError> {
        self.invoke(&DeleteWebhook {}).await
    }

    /// Fetch the status of the webhook. The URL is empty if none is set.
    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, InvocationError> {
        self.invoke(&GetWebhookInfo {}).await
    }
}
