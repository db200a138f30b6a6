// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use telego_types::{MissingParam, Response};

/// The error type reported by the Bot API when a request is misused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcError {
    /// A numerical value similar to HTTP status codes.
    pub code: i32,

    /// The human-readable description of the error.
    pub description: String,

    /// In case of exceeding flood control, the number of seconds left to
    /// wait before the request can be repeated.
    pub retry_after: Option<i32>,

    /// The group has been migrated to a supergroup with this identifier.
    pub migrate_to_chat_id: Option<i64>,
}

impl std::error::Error for RpcError {}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<Response> for RpcError {
    fn from(response: Response) -> Self {
        let parameters = response.parameters.unwrap_or_default();
        Self {
            code: response.error_code.unwrap_or(0),
            description: response.description.unwrap_or_default(),
            retry_after: parameters.retry_after,
            migrate_to_chat_id: parameters.migrate_to_chat_id,
        }
    }
}

impl RpcError {
    /// Checks whether the description of the error starts with `prefix`.
    ///
    /// The Bot API prefixes descriptions with a short category, such as
    /// `Bad Request` or `Too Many Requests`, which is what this is useful for.
    ///
    /// # Examples
    ///
    /// ```
    /// # let error = telego_sender::RpcError {
    /// #     code: 400, description: "Bad Request: chat not found".to_string(),
    /// #     retry_after: None, migrate_to_chat_id: None };
    /// #
    /// assert!(error.is("Bad Request"));
    /// assert!(!error.is("Forbidden"));
    /// ```
    pub fn is(&self, prefix: &str) -> bool {
        self.description.starts_with(prefix)
    }
}

/// This error occurs when a remote call was unsuccessful.
#[derive(Debug)]
pub enum InvocationError {
    /// A required parameter was missing, so the request was not sent.
    MissingParam(MissingParam),

    /// The server responded with HTTP 403 Forbidden, which normally means
    /// the bot token is wrong or the bot was blocked.
    Forbidden,

    /// The request could not be sent, or its response could not be read.
    Transport(reqwest::Error),

    /// Either the request could not be encoded, or the response was not
    /// the expected JSON.
    Decode(serde_json::Error),

    /// The request was delivered but the server reported it as failed.
    Rpc(RpcError),
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingParam(err) => Some(err),
            Self::Forbidden => None,
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Rpc(err) => Some(err),
        }
    }
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParam(err) => write!(f, "{err}"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::Transport(err) => write!(f, "request error, transport failed: {err}"),
            Self::Decode(err) => write!(f, "request error, bad response: {err}"),
            Self::Rpc(err) => write!(f, "{err}"),
        }
    }
}

impl From<MissingParam> for InvocationError {
    fn from(error: MissingParam) -> Self {
        Self::MissingParam(error)
    }
}

impl From<reqwest::Error> for InvocationError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error)
    }
}

impl From<serde_json::Error> for InvocationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error)
    }
}

impl From<RpcError> for InvocationError {
    fn from(error: RpcError) -> Self {
        Self::Rpc(error)
    }
}

impl InvocationError {
    /// Matches on the description of the RPC error (see [`RpcError::is`]).
    ///
    /// If the error is not a RPC error, returns `false`.
    #[inline]
    pub fn is(&self, prefix: &str) -> bool {
        match self {
            Self::Rpc(rpc) => rpc.is(prefix),
            _ => false,
        }
    }

    /// The RPC error, if the server is the one who reported the failure.
    pub fn rpc(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(rpc) => Some(rpc),
            _ => None,
        }
    }

    pub fn is_missing_param(&self) -> bool {
        matches!(self, Self::MissingParam(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telego_types::ResponseParameters;

    #[test]
    fn rpc_error_from_envelope() {
        let error = RpcError::from(Response {
            ok: false,
            result: None,
            error_code: Some(429),
            description: Some("Too Many Requests: retry after 31".into()),
            parameters: Some(ResponseParameters {
                migrate_to_chat_id: None,
                retry_after: Some(31),
            }),
        });

        assert_eq!(
            error,
            RpcError {
                code: 429,
                description: "Too Many Requests: retry after 31".into(),
                retry_after: Some(31),
                migrate_to_chat_id: None,
            }
        );
        assert!(error.is("Too Many Requests"));
    }

    #[test]
    fn message_is_the_description() {
        let error = InvocationError::from(RpcError {
            code: 400,
            description: "Bad Request: message text is empty".into(),
            retry_after: None,
            migrate_to_chat_id: None,
        });
        assert_eq!(error.to_string(), "Bad Request: message text is empty");
        assert_eq!(error.rpc().map(|e| e.code), Some(400));
        assert!(!error.is_forbidden());
    }

    #[test]
    fn missing_param_message() {
        let error = InvocationError::from(MissingParam { name: "text" });
        assert!(error.is_missing_param());
        assert!(!error.is("Bad Request"));
        assert_eq!(error.to_string(), "missing param: text");
    }
}
