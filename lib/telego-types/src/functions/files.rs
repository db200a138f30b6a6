// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::check_str;
use crate::types::File;
use crate::{MissingParam, RemoteCall};
use serde::Serialize;

/// Returns basic information about a file and prepares it for downloading.
///
/// Bots can download files of up to 20MB in size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new<F: Into<String>>(file_id: F) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl RemoteCall for GetFile {
    const METHOD: &'static str = "getFile";
    type Return = File;

    fn validate(&self) -> Result<(), MissingParam> {
        check_str(&self.file_id, "file_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_file_id() {
        assert_eq!(
            GetFile::new("").validate(),
            Err(MissingParam { name: "file_id" })
        );
        assert_eq!(GetFile::new("AgADBAADr6cxGw").validate(), Ok(()));
    }
}
