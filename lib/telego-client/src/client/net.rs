// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::client::ClientInner;
use crate::{Client, Config, InitParams};
use log::info;
use std::sync::Arc;
use telego_sender::{Configuration, InvocationError, Sender};
use telego_types::RemoteCall;
use telego_types::functions::GetMe;
use telego_types::types::User;

/// Method implementations related to creating the client and invoking requests.
impl Client {
    /// Creates and returns a new client instance upon successful connection to the Bot API.
    ///
    /// The identity of the bot is fetched right away with `getMe`, which also checks that the
    /// token is valid. If that call fails, so does this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use telego_client::{Client, Config};
    ///
    /// # async fn f() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::connect(Config {
    ///     token: std::env::var("BOT_TOKEN")?,
    ///     params: Default::default(),
    /// })
    /// .await?;
    ///
    /// println!("running as @{}", client.me().username.as_deref().unwrap_or("?"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: Config) -> Result<Self, InvocationError> {
        let Config { token, params } = config;
        let InitParams {
            api_url,
            debug_log,
            error_log,
        } = params;

        let sender = Sender::new(
            token,
            Configuration {
                api_url,
                debug_log,
                error_log,
                ..Default::default()
            },
        )?;

        let me = sender.invoke(&GetMe {}).await?;
        info!("connected as {} (id {})", me.full_name(), me.id);

        Ok(Self(Arc::new(ClientInner { sender, me })))
    }

    /// Shorthand for [`Client::connect`] against the production server.
    ///
    /// The two flags enable logging of raw responses (at `debug` level) and of failed calls
    /// (at `error` level), respectively. They never change the result of any call.
    pub async fn new<T: Into<String>>(
        token: T,
        debug_log: bool,
        error_log: bool,
    ) -> Result<Self, InvocationError> {
        Self::connect(Config {
            token: token.into(),
            params: InitParams {
                debug_log,
                error_log,
                ..Default::default()
            },
        })
        .await
    }

    /// The bot this client acts on behalf of, as returned by `getMe` upon connection.
    pub fn me(&self) -> &User {
        &self.0.me
    }

    /// Invoke a raw API call. This directly sends the request to the Bot API.
    ///
    /// Every other method of the client is built on top of this one, which is useful when a
    /// request has optional parameters that the convenience methods don't expose.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telego_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use telego_client::functions::SendMessage;
    /// use telego_client::types::ParseMode;
    ///
    /// client
    ///     .invoke(&SendMessage::new("@channel", "<b>hello</b>").parse_mode(ParseMode::Html))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<R: RemoteCall>(&self, request: &R) -> Result<R::Return, InvocationError> {
        self.0.sender.invoke(request).await
    }
}
