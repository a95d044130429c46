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

//! Test utilities for the REST API.

use crate::db::memory::{MemoryCatalogDb, new_db};
use crate::db::{CatalogTx, seed};
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use catalog_core::db::{BareTx, Db, DbError};
use catalog_core::model::EmailAddress;

pub(crate) struct TestContext {
    db: MemoryCatalogDb,
    app: Router,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        let _can_fail = env_logger::builder().is_test(true).try_init();
        let db = new_db();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    pub(crate) async fn setup_seeded() -> Self {
        let context = Self::setup();
        let mut tx = context.db.begin().await.unwrap();
        seed(&mut tx).await.unwrap();
        tx.commit().await.unwrap();
        context
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn create_item<N: Into<String>>(&self, id: i64, name: N, price: f64) {
        let mut tx = self.db.begin().await.unwrap();
        tx.create_item(Item::new(ItemId::new(id), name.into(), None, price)).await.unwrap();
        tx.commit().await.unwrap();
    }

    pub(crate) async fn get_item(&self, id: i64) -> Option<Item> {
        let mut tx = self.db.begin().await.unwrap();
        let item = match tx.get_item(ItemId::new(id)).await {
            Ok(item) => Some(item),
            Err(DbError::NotFound) => None,
            Err(e) => panic!("Unexpected error: {}", e),
        };
        tx.commit().await.unwrap();
        item
    }

    pub(crate) async fn items(&self) -> Vec<Item> {
        let mut tx = self.db.begin().await.unwrap();
        let items = tx.get_items().await.unwrap();
        tx.commit().await.unwrap();
        items
    }

    pub(crate) async fn create_user(
        &self,
        id: i64,
        username: &'static str,
        full_name: Option<&str>,
    ) {
        let user = User::new(
            UserId::new(id),
            Username::from(username),
            EmailAddress::from(format!("{}@example.com", username).as_str()),
            full_name.map(|name| FullName::new(name).unwrap()),
            true,
        );
        let mut tx = self.db.begin().await.unwrap();
        tx.create_user(user).await.unwrap();
        tx.commit().await.unwrap();
    }

    pub(crate) async fn get_user(&self, id: i64) -> Option<User> {
        let mut tx = self.db.begin().await.unwrap();
        let user = match tx.get_user(UserId::new(id)).await {
            Ok(user) => Some(user),
            Err(DbError::NotFound) => None,
            Err(e) => panic!("Unexpected error: {}", e),
        };
        tx.commit().await.unwrap();
        user
    }

    pub(crate) async fn users(&self) -> Vec<User> {
        let mut tx = self.db.begin().await.unwrap();
        let users = tx.get_users().await.unwrap();
        tx.commit().await.unwrap();
        users
    }
}
