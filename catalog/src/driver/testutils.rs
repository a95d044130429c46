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

//! Test utilities for the business layer.

use crate::db::CatalogTx;
use crate::db::memory::{MemoryCatalogDb, new_db};
use crate::driver::Driver;
use crate::model::*;
use catalog_core::db::{BareTx, Db};

pub(crate) struct TestContext {
    db: MemoryCatalogDb,
    driver: Driver<MemoryCatalogDb>,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        let _can_fail = env_logger::builder().is_test(true).try_init();
        let db = new_db();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    pub(crate) fn driver(&self) -> Driver<MemoryCatalogDb> {
        self.driver.clone()
    }

    pub(crate) async fn items(&self) -> Vec<Item> {
        let mut tx = self.db.begin().await.unwrap();
        let items = tx.get_items().await.unwrap();
        tx.commit().await.unwrap();
        items
    }

    pub(crate) async fn users(&self) -> Vec<User> {
        let mut tx = self.db.begin().await.unwrap();
        let users = tx.get_users().await.unwrap();
        tx.commit().await.unwrap();
        users
    }
}
