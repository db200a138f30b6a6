// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to files.

use super::Client;
use telego_sender::InvocationError;
use telego_types::functions::GetFile;
use telego_types::types::File;

impl Client {
    /// Prepare a file for download, returning its information.
    ///
    /// The link to download it can then be built with [`Client::file_url`].
    pub async fn get_file<F: Into<String>>(&self, file_id: F) -> Result<File, InvocationError> {
        self.invoke(&GetFile::new(file_id)).await
    }

    /// Build the link from which the given file can be downloaded.
    ///
    /// Returns `None` if the server did not provide a path for the file, which happens when
    /// it is too big to be downloaded by bots. The link contains the token of the bot.
    pub fn file_url(&self, file: &File) -> Option<String> {
        file.file_path
            .as_deref()
            .map(|path| self.0.sender.file_url(path))
    }
}
