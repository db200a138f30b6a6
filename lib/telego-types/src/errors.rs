// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur when validating [`functions`] before sending them.
//!
//! [`functions`]: ../functions/index.html
use std::error::Error;
use std::fmt;

/// The error type indicating a required parameter of a remote call was
/// missing (or empty), so the request was never sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissingParam {
    /// The name of the parameter, as it would appear in the request.
    pub name: &'static str,
}

impl Error for MissingParam {}

impl fmt::Display for MissingParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing param: {}", self.name)
    }
}

impl MissingParam {
    /// Fails with the parameter `name` unless `present` holds.
    pub fn check(present: bool, name: &'static str) -> Result<(), Self> {
        if present { Ok(()) } else { Err(Self { name }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_name() {
        assert_eq!(MissingParam::check(true, "text"), Ok(()));
        assert_eq!(
            MissingParam::check(false, "text"),
            Err(MissingParam { name: "text" })
        );
        assert_eq!(
            MissingParam { name: "chat_id" }.to_string(),
            "missing param: chat_id"
        );
    }
}
