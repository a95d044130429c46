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

//! The `Item` data type and its public projection.

use crate::model::ItemId;
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Representation of an item offered by the catalog.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub(crate) struct Item {
    /// Unique identifier of the item, chosen by the client.
    id: ItemId,

    /// Display name of the item.
    name: String,

    /// Optional long-form description.
    description: Option<String>,

    /// Unit price of the item.
    price: f64,
}

/// Subset of the fields of an `Item` that is returned to clients.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct ItemResponse {
    /// Unique identifier of the item.
    id: ItemId,

    /// Display name of the item.
    name: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self { id: item.id, name: item.name }
    }
}
