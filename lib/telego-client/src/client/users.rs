// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to users.

use super::Client;
use telego_sender::InvocationError;
use telego_types::functions::{GetMe, GetUserProfilePhotos};
use telego_types::types::{User, UserProfilePhotos};

impl Client {
    /// Fetch the identity of the bot again.
    ///
    /// The identity fetched upon connection is available without a request through
    /// [`Client::me`].
    pub async fn get_me(&self) -> Result<User, InvocationError> {
        self.invoke(&GetMe {}).await
    }

    /// Fetch a page of the profile pictures of a user.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telego_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use telego_client::functions::GetUserProfilePhotos;
    ///
    /// let photos = client
    ///     .get_user_profile_photos(GetUserProfilePhotos::new(1234).limit(5))
    ///     .await?;
    ///
    /// println!("the user has {} profile pictures", photos.total_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_user_profile_photos(
        &self,
        request: GetUserProfilePhotos,
    ) -> Result<UserProfilePhotos, InvocationError> {
        self.invoke(&request).await
    }
}
