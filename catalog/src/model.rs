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

//! High-level data types.

use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};

mod item;
pub(crate) use item::{Item, ItemResponse};
mod user;
pub(crate) use user::{FullName, User, UserResponse};
mod username;
pub(crate) use username::Username;

/// Generates a newtype for the caller-supplied identifier of an entity.
macro_rules! entity_id [
    ( $name:ident, $entity:literal ) => {
        #[doc = concat!("Caller-supplied identifier of ", $entity, ".")]
        #[derive(
            Clone, Constructor, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd,
            Serialize,
        )]
        #[serde(transparent)]
        pub(crate) struct $name(i64);
    }
];

entity_id!(ItemId, "an item");
entity_id!(UserId, "a user");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_tokens};

    #[test]
    fn test_entity_id_display() {
        assert_eq!("42", ItemId::new(42).to_string());
        assert_eq!("-7", UserId::new(-7).to_string());
    }

    #[test]
    fn test_entity_id_ser_de() {
        assert_tokens(&ItemId::new(5), &[Token::I64(5)]);
        assert_tokens(&UserId::new(6), &[Token::I64(6)]);
    }
}
