// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for the Telegram Bot API
//! [`types`] and [`functions`] in the form of `struct` and `enum`.
//!
//! Every type implements `serde`'s `Serialize` and `Deserialize`, mirroring
//! the JSON objects the Bot API sends and receives. Optional fields are
//! represented as [`Option`], and are omitted again when serialized.
//!
//! Every function implements [`RemoteCall`], which knows the name of the
//! remote method, the type of its result, and how to check that all the
//! required parameters are present before anything is sent.
//!
//! [`types`]: types/index.html
//! [`functions`]: functions/index.html
//! [`RemoteCall`]: trait.RemoteCall.html
mod envelope;
pub mod errors;
pub mod functions;
pub mod types;

pub use envelope::{Response, ResponseParameters};
pub use errors::MissingParam;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Structures implementing this trait indicate that they are suitable for
/// use to perform remote calls against the Bot API, and know what the type
/// of the response will be.
pub trait RemoteCall: Serialize {
    /// The name of the remote method, as it appears in the request URL.
    const METHOD: &'static str;

    /// The type of the "return" value found in the `result` of the response.
    type Return: DeserializeOwned;

    /// Check that every required parameter is present.
    ///
    /// Implementations should not perform any kind of I/O, since this is
    /// used to fail early, before the request is sent.
    fn validate(&self) -> Result<(), MissingParam> {
        Ok(())
    }
}
