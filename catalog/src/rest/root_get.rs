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

//! API to greet clients at the root of the service.

use axum::Json;
use axum::response::IntoResponse;
use catalog_core::rest::{EmptyBody, RestError};
use serde::Serialize;

/// Message returned by the root of the service.
#[derive(Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub(crate) struct WelcomeResponse {
    /// Human-readable greeting.
    message: String,
}

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> Result<impl IntoResponse, RestError> {
    Ok(Json(WelcomeResponse { message: "Welcome to the catalog service!".to_owned() }))
}
