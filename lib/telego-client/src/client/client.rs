// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::sync::Arc;
use telego_sender::{DEFAULT_API_URL, Sender};
use telego_types::types::User;

/// Configuration required to create a [`Client`] instance.
pub struct Config {
    /// The bot token, as given by BotFather when the bot is created.
    ///
    /// It looks like `123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11`.
    pub token: String,

    /// Additional initialization parameters that can have sane defaults.
    pub params: InitParams,
}

/// Optional initialization parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitParams {
    /// Base address of the Bot API server. By default, the production server
    /// is used. This field can be used to point the client at a self-hosted
    /// Bot API server instead.
    pub api_url: String,
    /// Log the raw response of every call at the `debug` level.
    pub debug_log: bool,
    /// Log every failed call at the `error` level.
    ///
    /// The error is returned to the caller regardless.
    pub error_log: bool,
}

pub(crate) struct ClientInner {
    pub(crate) sender: Sender,
    pub(crate) me: User,
}

/// A client capable of invoking the methods of the Bot API on behalf of a bot.
///
/// This structure is the "entry point" of the library, from which you can start using the rest.
///
/// The client can be cloned cheaply, and the clones can be moved to other tasks to invoke
/// requests concurrently.
#[derive(Clone)]
pub struct Client(pub(crate) Arc<ClientInner>);

impl Default for InitParams {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debug_log: false,
            error_log: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("params", &self.params)
            .finish()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("me", &self.0.me.username)
            .field("sender", &self.0.sender)
            .finish()
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
