// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library is a high-level interface to the [Telegram Bot API], built on top of
//! [`telego_sender`] and [`telego_types`].
//!
//! A [`Client`] is created from the token of a bot and checks it right away by fetching the
//! identity of the bot. From then on, every method of the API is an `async` method of the
//! client, and any request not covered by them can be made through [`Client::invoke`].
//!
//! ```
//! use telego_client::Client;
//! use telego_client::functions::SendMessage;
//!
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(std::env::var("BOT_TOKEN")?, false, true).await?;
//! client.send_message(SendMessage::new("@channel", "Hello!")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Errors are reported as [`InvocationError`]. Failed calls are not retried; when the server
//! asks to slow down, the waiting time is available through [`RpcError::retry_after`].
//!
//! [Telegram Bot API]: https://core.telegram.org/bots/api
pub mod client;

pub use client::{Client, Config, InitParams};
pub use telego_sender::{InvocationError, RpcError};
pub use telego_types::{MissingParam, functions, types};
