// Catalog
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! The `User` data type and its public projection.

use crate::model::{UserId, Username};
use catalog_core::model::{EmailAddress, ModelError, ModelResult};
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum length of a full name, in characters.
pub(crate) const MAX_FULL_NAME_LENGTH: usize = 100;

/// The real name of a user.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct FullName(String);

impl FullName {
    /// Creates a new full name from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();
        if s.chars().count() > MAX_FULL_NAME_LENGTH {
            return Err(ModelError(format!(
                "Full name must have at most {} characters",
                MAX_FULL_NAME_LENGTH
            )));
        }
        Ok(Self(s))
    }
}

impl<'de> Deserialize<'de> for FullName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        FullName::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Default value for `User::is_active` when the client does not provide one.
fn default_is_active() -> bool {
    true
}

/// Representation of a user account.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub(crate) struct User {
    /// Unique identifier of the user, chosen by the client.
    id: UserId,

    /// Login name of the user.
    username: Username,

    /// Contact address of the user.
    email: EmailAddress,

    /// Real name of the user, if known.
    full_name: Option<FullName>,

    /// Whether the account is enabled.
    #[serde(default = "default_is_active")]
    is_active: bool,
}

/// Subset of the fields of a `User` that is returned to clients.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct UserResponse {
    /// Unique identifier of the user.
    id: UserId,

    /// Real name of the user, if known.
    full_name: Option<FullName>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { id: user.id, full_name: user.full_name }
    }
}
