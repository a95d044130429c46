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

//! Operations on the items collection.

use crate::db::CatalogTx;
use crate::driver::Driver;
use crate::model::*;
use catalog_core::db::{BareTx, Db, DbError};
use catalog_core::driver::{DriverError, DriverResult};
use log::debug;

/// Converts a database error `e` raised while accessing the item `id` to a driver error.
fn item_error(id: ItemId, e: DbError) -> DriverError {
    match e {
        DbError::AlreadyExists => {
            DriverError::AlreadyExists(format!("Item with id {} already exists", id))
        }
        DbError::NotFound => DriverError::NotFound(format!("Item with id {} not found", id)),
        e => DriverError::from(e),
    }
}

impl<D> Driver<D>
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    /// Gets all existing items in insertion order.
    pub(crate) async fn get_items(self) -> DriverResult<Vec<Item>> {
        let mut tx = self.db.begin().await?;
        let items = tx.get_items().await?;
        tx.commit().await?;
        Ok(items)
    }

    /// Gets the item identified by `id`.
    pub(crate) async fn get_item(self, id: ItemId) -> DriverResult<Item> {
        let mut tx = self.db.begin().await?;
        let item = tx.get_item(id).await.map_err(|e| item_error(id, e))?;
        tx.commit().await?;
        Ok(item)
    }

    /// Adds a new `item` to the catalog and returns it as stored.
    pub(crate) async fn create_item(self, item: Item) -> DriverResult<Item> {
        let id = *item.id();
        let mut tx = self.db.begin().await?;
        tx.create_item(item.clone()).await.map_err(|e| item_error(id, e))?;
        tx.commit().await?;
        debug!("Created item {}", id);
        Ok(item)
    }

    /// Replaces the item identified by `id` with `item` and returns it as stored.
    ///
    /// The item identified by `id` must exist, and the identifier embedded in `item` must
    /// match `id`.
    pub(crate) async fn replace_item(self, id: ItemId, item: Item) -> DriverResult<Item> {
        let mut tx = self.db.begin().await?;
        tx.get_item(id).await.map_err(|e| item_error(id, e))?;
        if *item.id() != id {
            return Err(DriverError::InvalidInput(format!(
                "Item id {} in body does not match id {} in path",
                item.id(),
                id
            )));
        }
        tx.replace_item(id, item.clone()).await.map_err(|e| item_error(id, e))?;
        tx.commit().await?;
        debug!("Replaced item {}", id);
        Ok(item)
    }

    /// Deletes the item identified by `id`.
    pub(crate) async fn delete_item(self, id: ItemId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        tx.delete_item(id).await.map_err(|e| item_error(id, e))?;
        tx.commit().await?;
        debug!("Deleted item {}", id);
        Ok(())
    }
}
