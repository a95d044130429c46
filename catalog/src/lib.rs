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

//! REST service that exposes CRUD operations over in-memory items and users.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use catalog_core::db::{BareTx, Db};
use log::info;
use std::error::Error;

pub mod config;
use config::Config;
pub(crate) mod db;
use db::memory::new_db;
use db::seed;
pub(crate) mod driver;
use driver::Driver;
pub(crate) mod model;
mod rest;
use rest::app;

/// Instantiates all resources, loads the initial records and serves the application as
/// described by `config`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(config: Config) -> Result<(), Box<dyn Error>> {
    let db = new_db();
    let mut tx = db.begin().await?;
    seed(&mut tx).await?;
    tx.commit().await?;

    let driver = Driver::new(db);
    let app = app(driver);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
