// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Address of the production Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// Base address of the Bot API server, without a trailing slash.
    ///
    /// Can be pointed at a self-hosted Bot API server, or at a fake server
    /// when testing.
    pub api_url: String,
    /// Log the raw body of every response at the `debug` level.
    pub debug_log: bool,
    /// Log every failed call at the `error` level.
    pub error_log: bool,
    pub user_agent: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debug_log: false,
            error_log: false,
            user_agent: format!("telego/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
