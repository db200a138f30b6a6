// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to receive updates, either by long polling or through a webhook.
//!
//! The two are mutually exclusive: `getUpdates` will not work while an
//! outgoing webhook is set up.
use crate::types::{Update, WebhookInfo};
use crate::RemoteCall;
use serde::{Serialize, Serializer};

/// Default and maximum amount of updates fetched by a single [`GetUpdates`].
pub const MAX_UPDATES_LIMIT: i32 = 100;

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn serialize_limit<S: Serializer>(limit: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    if (1..=MAX_UPDATES_LIMIT).contains(limit) {
        serializer.serialize_i32(*limit)
    } else {
        serializer.serialize_i32(MAX_UPDATES_LIMIT)
    }
}

fn serialize_timeout<S: Serializer>(timeout: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i32((*timeout).max(0))
}

/// Receives incoming updates using long polling.
///
/// `limit` and `timeout` are always sent. A `limit` outside of `1..=100` is
/// sent as `100`, and a negative `timeout` as `0` (short polling). `offset`
/// is only sent when it's not zero, and `allowed_updates` when not empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetUpdates {
    /// Identifier of the first update to be returned. Must be one greater
    /// than the highest among the previously received updates.
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: i64,
    #[serde(serialize_with = "serialize_limit")]
    pub limit: i32,
    /// Timeout in seconds for long polling.
    #[serde(serialize_with = "serialize_timeout")]
    pub timeout: i32,
    /// Types of updates the bot should receive, such as `message` or `callback_query`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
}

impl GetUpdates {
    pub fn new() -> Self {
        Self {
            limit: MAX_UPDATES_LIMIT,
            ..Default::default()
        }
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = limit;
        self
    }

    pub fn timeout(mut self, timeout: i32) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn allowed_updates<I, S>(mut self, allowed_updates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_updates = allowed_updates.into_iter().map(Into::into).collect();
        self
    }
}

impl RemoteCall for GetUpdates {
    const METHOD: &'static str = "getUpdates";
    type Return = Vec<Update>;
}

/// Specifies a URL to receive incoming updates via an outgoing webhook.
///
/// An empty URL removes the webhook integration. The URL is always sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SetWebhook {
    /// HTTPS URL to send updates to.
    pub url: String,
    /// Public key certificate, so that the root certificate in use can be checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// Maximum allowed number of simultaneous HTTPS connections for update delivery, 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
}

impl SetWebhook {
    pub fn new<U: Into<String>>(url: U) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn allowed_updates<I, S>(mut self, allowed_updates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_updates = allowed_updates.into_iter().map(Into::into).collect();
        self
    }
}

optional_params!(SetWebhook {
    certificate: String,
    max_connections: i32,
});

impl RemoteCall for SetWebhook {
    const METHOD: &'static str = "setWebhook";
    type Return = bool;
}

/// Removes the webhook integration, to switch back to [`GetUpdates`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteWebhook {}

impl RemoteCall for DeleteWebhook {
    const METHOD: &'static str = "deleteWebhook";
    type Return = bool;
}

/// Returns the current webhook status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetWebhookInfo {}

impl RemoteCall for GetWebhookInfo {
    const METHOD: &'static str = "getWebhookInfo";
    type Return = WebhookInfo;
}
