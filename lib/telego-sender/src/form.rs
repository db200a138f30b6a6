// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of requests into `application/x-www-form-urlencoded` pairs.
//!
//! The Bot API expects every parameter as a string: strings are sent as-is,
//! numbers and booleans as their JSON text, and structured values (such as
//! keyboards or inline results) as JSON-serialized text. `null` values are
//! not sent at all.
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;

/// Encode `request` as a list of form pairs.
///
/// Fails if `request` does not serialize into a JSON object.
pub fn encode<R: Serialize + ?Sized>(
    request: &R,
) -> Result<Vec<(String, String)>, serde_json::Error> {
    let map = match serde_json::to_value(request)? {
        Value::Object(map) => map,
        other => {
            return Err(serde_json::Error::custom(format!(
                "request must serialize into an object, not {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(string) => string,
            Value::Bool(boolean) => boolean.to_string(),
            Value::Number(number) => number.to_string(),
            nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
        };
        pairs.push((key, value));
    }
    Ok(pairs)
}
