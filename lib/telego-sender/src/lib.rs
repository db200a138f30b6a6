// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library serves as the transport layer of `telego`: it knows how to
//! send any [`RemoteCall`] to the Bot API over HTTP and how to interpret the
//! envelope of its response.
//!
//! Every call is a single `POST` of form-encoded parameters to
//! `<api_url>/bot<token>/<method>`. There is no retry nor any other state
//! shared between calls.
//!
//! [`RemoteCall`]: telego_types::RemoteCall
mod configuration;
mod errors;
pub mod form;

pub use configuration::{Configuration, DEFAULT_API_URL};
pub use errors::{InvocationError, RpcError};
use log::{debug, error};
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use telego_types::{RemoteCall, Response};

/// Sends requests to the Bot API on behalf of a single bot.
///
/// Cloning a `Sender` is cheap, and the clones share the same connection pool.
#[derive(Clone)]
pub struct Sender {
    http: reqwest::Client,
    token: String,
    configuration: Configuration,
}

impl fmt::Debug for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("token", &"<redacted>")
            .field("configuration", &self.configuration)
            .finish()
    }
}

impl Sender {
    /// Create a new sender for the bot identified by `token`.
    ///
    /// No request is made. This only fails if the underlying HTTP client
    /// cannot be initialized.
    pub fn new<T: Into<String>>(
        token: T,
        configuration: Configuration,
    ) -> Result<Self, InvocationError> {
        let http = reqwest::Client::builder()
            .user_agent(configuration.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            token: token.into(),
            configuration,
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    fn base_url(&self) -> &str {
        self.configuration.api_url.trim_end_matches('/')
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url(), self.token, method)
    }

    /// The link from which the file at `file_path` can be downloaded.
    ///
    /// The `file_path` is obtained from a call to `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.base_url(), self.token, file_path)
    }

    /// Invoke a remote method and wait for its result.
    ///
    /// The request is validated first, and if a required parameter is
    /// missing, nothing is sent.
    pub async fn invoke<R: RemoteCall>(&self, request: &R) -> Result<R::Return, InvocationError> {
        let result = self.try_invoke(request).await;
        if let Err(err) = &result {
            if self.configuration.error_log {
                error!("{} failed: {}", R::METHOD, err);
            }
        }
        result
    }

    async fn try_invoke<R: RemoteCall>(&self, request: &R) -> Result<R::Return, InvocationError> {
        request.validate()?;
        let params = form::encode(request)?;

        let response = self
            .http
            .post(self.method_url(R::METHOD))
            .form(&params)
            .send()
            .await?;

        // The body of a forbidden response is not worth decoding.
        if response.status() == StatusCode::FORBIDDEN {
            return Err(InvocationError::Forbidden);
        }

        let body = response.bytes().await?;
        if self.configuration.debug_log {
            debug!("{} {}", R::METHOD, String::from_utf8_lossy(&body));
        }

        let envelope = serde_json::from_slice::<Response>(&body)?;
        if !envelope.ok {
            return Err(RpcError::from(envelope).into());
        }

        let result = envelope.result.unwrap_or(Value::Null);
        Ok(serde_json::from_value(result)?)
    }
}
