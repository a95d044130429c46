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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::*;
use catalog_core::db::{BareTx, DbResult};
use catalog_core::model::EmailAddress;

pub(crate) mod memory;

/// A transaction with high-level operations that deal with our types.
#[async_trait::async_trait]
pub(crate) trait CatalogTx: BareTx {
    /// Gets all existing items in insertion order.
    async fn get_items(&mut self) -> DbResult<Vec<Item>>;

    /// Gets the item identified by `id`.
    async fn get_item(&mut self, id: ItemId) -> DbResult<Item>;

    /// Appends a new `item`.  Fails with `AlreadyExists` if its identifier is taken.
    async fn create_item(&mut self, item: Item) -> DbResult<()>;

    /// Overwrites the item identified by `id` with `item`, keeping its position.
    async fn replace_item(&mut self, id: ItemId, item: Item) -> DbResult<()>;

    /// Deletes the item identified by `id`.
    async fn delete_item(&mut self, id: ItemId) -> DbResult<()>;

    /// Gets all existing users in insertion order.
    async fn get_users(&mut self) -> DbResult<Vec<User>>;

    /// Gets the user identified by `id`.
    async fn get_user(&mut self, id: UserId) -> DbResult<User>;

    /// Appends a new `user`.  Fails with `AlreadyExists` if its identifier is taken.
    async fn create_user(&mut self, user: User) -> DbResult<()>;

    /// Overwrites the user identified by `id` with `user`, keeping its position.
    async fn replace_user(&mut self, id: UserId, user: User) -> DbResult<()>;

    /// Deletes the user identified by `id`.
    async fn delete_user(&mut self, id: UserId) -> DbResult<()>;
}

/// Populates the database with the records that the service offers on startup.
pub(crate) async fn seed<T: CatalogTx + Send>(tx: &mut T) -> DbResult<()> {
    let items = [
        (1, "Item 1", Some("First item"), 10.99),
        (2, "Item 2", Some("Second item"), 20.50),
        (3, "Item 3", None, 15.75),
    ];
    for (id, name, description, price) in items {
        let item =
            Item::new(ItemId::new(id), name.to_owned(), description.map(str::to_owned), price);
        tx.create_item(item).await?;
    }

    let users = [
        (1, "john_doe", "john@example.com", Some("John Doe"), true),
        (2, "jane_smith", "jane@example.com", Some("Jane Smith"), true),
        (3, "bob_wilson", "bob@example.com", None, false),
    ];
    for (id, username, email, full_name, is_active) in users {
        let user = User::new(
            UserId::new(id),
            Username::new(username)?,
            EmailAddress::new(email)?,
            full_name.map(FullName::new).transpose()?,
            is_active,
        );
        tx.create_user(user).await?;
    }

    Ok(())
}
