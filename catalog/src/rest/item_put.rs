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

//! API to replace an existing item.

use crate::db::CatalogTx;
use crate::driver::Driver;
use crate::model::{Item, ItemId, ItemResponse};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use catalog_core::db::Db;
use catalog_core::rest::{JsonBody, PathParam, RestError};

/// API handler.
pub(crate) async fn handler<D>(
    State(driver): State<Driver<D>>,
    PathParam(id): PathParam<ItemId>,
    JsonBody(item): JsonBody<Item>,
) -> Result<impl IntoResponse, RestError>
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    let item = driver.replace_item(id, item).await?;
    Ok(Json(ItemResponse::from(item)))
}
