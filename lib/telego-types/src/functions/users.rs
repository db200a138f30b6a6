// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::check_user;
use crate::types::{User, UserProfilePhotos};
use crate::{MissingParam, RemoteCall};
use serde::Serialize;

/// Returns basic information about the bot itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetMe {}

impl RemoteCall for GetMe {
    const METHOD: &'static str = "getMe";
    type Return = User;
}

/// Returns the profile pictures of a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    /// Sequential number of the first photo to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    /// Limits the number of photos to be retrieved, 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }
}

optional_params!(GetUserProfilePhotos {
    offset: i32,
    limit: i32,
});

impl RemoteCall for GetUserProfilePhotos {
    const METHOD: &'static str = "getUserProfilePhotos";
    type Return = UserProfilePhotos;

    fn validate(&self) -> Result<(), MissingParam> {
        check_user(self.user_id)
    }
}
