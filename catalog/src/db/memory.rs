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

//! Implementation of the database abstraction using in-memory collections.

use crate::db::CatalogTx;
use crate::model::*;
use catalog_core::db::memory::{MemoryDb, MemoryTx};
use catalog_core::db::{BareTx, DbError, DbResult};

/// All data of the service.
#[derive(Clone, Default)]
pub(crate) struct Tables {
    /// The items collection, in insertion order.
    items: Vec<Item>,

    /// The users collection, in insertion order.
    users: Vec<User>,
}

/// A database that keeps the catalog in memory.
pub(crate) type MemoryCatalogDb = MemoryDb<Tables, MemoryCatalogTx>;

/// Creates a new empty in-memory database.
pub(crate) fn new_db() -> MemoryCatalogDb {
    MemoryDb::new(Tables::default())
}

/// An entity that lives in a collection and is addressable by its identifier.
trait Record {
    /// Type of the identifier of the entity.
    type Id: Copy + PartialEq;

    /// Returns the identifier of the entity.
    fn key(&self) -> Self::Id;
}

impl Record for Item {
    type Id = ItemId;

    fn key(&self) -> ItemId {
        *self.id()
    }
}

impl Record for User {
    type Id = UserId;

    fn key(&self) -> UserId {
        *self.id()
    }
}

/// Finds the index of the record identified by `id` in `records`.
fn position<R: Record>(records: &[R], id: R::Id) -> DbResult<usize> {
    records.iter().position(|r| r.key() == id).ok_or(DbError::NotFound)
}

/// Gets a copy of the record identified by `id` in `records`.
fn get<R: Record + Clone>(records: &[R], id: R::Id) -> DbResult<R> {
    let i = position(records, id)?;
    Ok(records[i].clone())
}

/// Appends `record` to `records` unless its identifier is already in use.
fn insert<R: Record>(records: &mut Vec<R>, record: R) -> DbResult<()> {
    if records.iter().any(|r| r.key() == record.key()) {
        return Err(DbError::AlreadyExists);
    }
    records.push(record);
    Ok(())
}

/// Overwrites the record identified by `id` in `records` with `record`.
///
/// `record` may carry a different identifier than `id` as long as it does not clash with the
/// identifier of any other record.  The driver never passes mismatched identifiers, so only the
/// database tests reach the clash check.
fn replace<R: Record>(records: &mut [R], id: R::Id, record: R) -> DbResult<()> {
    let i = position(records, id)?;
    let new_id = record.key();
    if new_id != id && records.iter().any(|r| r.key() == new_id) {
        return Err(DbError::AlreadyExists);
    }
    records[i] = record;
    Ok(())
}

/// Removes the record identified by `id` from `records`.
fn remove<R: Record>(records: &mut Vec<R>, id: R::Id) -> DbResult<()> {
    let i = position(records, id)?;
    records.remove(i);
    Ok(())
}

/// A transaction backed by the in-memory database.
pub(crate) struct MemoryCatalogTx {
    /// Inner transaction type to obtain access to the raw collections.
    tx: MemoryTx<Tables>,
}

impl From<MemoryTx<Tables>> for MemoryCatalogTx {
    fn from(tx: MemoryTx<Tables>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl BareTx for MemoryCatalogTx {
    async fn commit(self) -> DbResult<()> {
        self.tx.commit();
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogTx for MemoryCatalogTx {
    async fn get_items(&mut self) -> DbResult<Vec<Item>> {
        Ok(self.tx.data().items.clone())
    }

    async fn get_item(&mut self, id: ItemId) -> DbResult<Item> {
        get(&self.tx.data().items, id)
    }

    async fn create_item(&mut self, item: Item) -> DbResult<()> {
        insert(&mut self.tx.data_mut().items, item)
    }

    async fn replace_item(&mut self, id: ItemId, item: Item) -> DbResult<()> {
        replace(&mut self.tx.data_mut().items, id, item)
    }

    async fn delete_item(&mut self, id: ItemId) -> DbResult<()> {
        remove(&mut self.tx.data_mut().items, id)
    }

    async fn get_users(&mut self) -> DbResult<Vec<User>> {
        Ok(self.tx.data().users.clone())
    }

    async fn get_user(&mut self, id: UserId) -> DbResult<User> {
        get(&self.tx.data().users, id)
    }

    async fn create_user(&mut self, user: User) -> DbResult<()> {
        insert(&mut self.tx.data_mut().users, user)
    }

    async fn replace_user(&mut self, id: UserId, user: User) -> DbResult<()> {
        replace(&mut self.tx.data_mut().users, id, user)
    }

    async fn delete_user(&mut self, id: UserId) -> DbResult<()> {
        remove(&mut self.tx.data_mut().users, id)
    }
}
