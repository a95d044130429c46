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

//! Operations on the users collection.

use crate::db::CatalogTx;
use crate::driver::Driver;
use crate::model::*;
use catalog_core::db::{BareTx, Db, DbError};
use catalog_core::driver::{DriverError, DriverResult};
use log::debug;

/// Converts a database error `e` raised while accessing the user `id` to a driver error.
fn user_error(id: UserId, e: DbError) -> DriverError {
    match e {
        DbError::AlreadyExists => {
            DriverError::AlreadyExists(format!("User with id {} already exists", id))
        }
        DbError::NotFound => DriverError::NotFound(format!("User with id {} not found", id)),
        e => DriverError::from(e),
    }
}

impl<D> Driver<D>
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    /// Gets all existing users in insertion order.
    pub(crate) async fn get_users(self) -> DriverResult<Vec<User>> {
        let mut tx = self.db.begin().await?;
        let users = tx.get_users().await?;
        tx.commit().await?;
        Ok(users)
    }

    /// Gets the user identified by `id`.
    pub(crate) async fn get_user(self, id: UserId) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;
        let user = tx.get_user(id).await.map_err(|e| user_error(id, e))?;
        tx.commit().await?;
        Ok(user)
    }

    /// Registers a new `user` and returns it as stored.
    pub(crate) async fn create_user(self, user: User) -> DriverResult<User> {
        let id = *user.id();
        let mut tx = self.db.begin().await?;
        tx.create_user(user.clone()).await.map_err(|e| user_error(id, e))?;
        tx.commit().await?;
        debug!("Created user {} ({})", id, user.username().as_str());
        Ok(user)
    }

    /// Replaces the user identified by `id` with `user` and returns it as stored.
    ///
    /// The user identified by `id` must exist, and the identifier embedded in `user` must
    /// match `id`.
    pub(crate) async fn replace_user(self, id: UserId, user: User) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;
        tx.get_user(id).await.map_err(|e| user_error(id, e))?;
        if *user.id() != id {
            return Err(DriverError::InvalidInput(format!(
                "User id {} in body does not match id {} in path",
                user.id(),
                id
            )));
        }
        tx.replace_user(id, user.clone()).await.map_err(|e| user_error(id, e))?;
        tx.commit().await?;
        debug!("Replaced user {}", id);
        Ok(user)
    }

    /// Deletes the user identified by `id`.
    pub(crate) async fn delete_user(self, id: UserId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        tx.delete_user(id).await.map_err(|e| user_error(id, e))?;
        tx.commit().await?;
        debug!("Deleted user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use catalog_core::model::EmailAddress;

    fn user(id: i64, username: &'static str, active: bool) -> User {
        User::new(
            UserId::new(id),
            Username::from(username),
            EmailAddress::from("someone@example.com"),
            None,
            active,
        )
    }

    #[tokio::test]
    async fn test_get_users_none() {
        let context = TestContext::setup();

        assert!(context.driver().get_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let context = TestContext::setup();

        let created = context.driver().create_user(user(4, "alice", true)).await.unwrap();
        assert_eq!(user(4, "alice", true), created);

        assert_eq!(created, context.driver().get_user(UserId::new(4)).await.unwrap());
        assert_eq!(vec![created], context.driver().get_users().await.unwrap());
    }

    #[tokio::test]
    async fn test_create_already_exists() {
        let context = TestContext::setup();

        context.driver().create_user(user(4, "alice", true)).await.unwrap();

        assert_eq!(
            DriverError::AlreadyExists("User with id 4 already exists".to_owned()),
            context.driver().create_user(user(4, "mallory", true)).await.unwrap_err()
        );
        assert_eq!(vec![user(4, "alice", true)], context.users().await);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let context = TestContext::setup();

        assert_eq!(
            DriverError::NotFound("User with id 1 not found".to_owned()),
            context.driver().get_user(UserId::new(1)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_replace_user_ok() {
        let context = TestContext::setup();

        context.driver().create_user(user(1, "alice", true)).await.unwrap();

        context.driver().replace_user(UserId::new(1), user(1, "alicia", false)).await.unwrap();

        assert_eq!(vec![user(1, "alicia", false)], context.users().await);
    }

    #[tokio::test]
    async fn test_replace_user_not_found() {
        let context = TestContext::setup();

        assert_eq!(
            DriverError::NotFound("User with id 1 not found".to_owned()),
            context.driver().replace_user(UserId::new(1), user(1, "alice", true)).await.unwrap_err()
        );
        assert!(context.users().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_user_id_mismatch() {
        let context = TestContext::setup();

        context.driver().create_user(user(1, "alice", true)).await.unwrap();

        assert_eq!(
            DriverError::InvalidInput("User id 2 in body does not match id 1 in path".to_owned()),
            context.driver().replace_user(UserId::new(1), user(2, "bob", true)).await.unwrap_err()
        );
        assert_eq!(vec![user(1, "alice", true)], context.users().await);
    }

    #[tokio::test]
    async fn test_replace_user_not_found_takes_precedence_over_mismatch() {
        let context = TestContext::setup();

        context.driver().create_user(user(1, "alice", true)).await.unwrap();

        assert_eq!(
            DriverError::NotFound("User with id 7 not found".to_owned()),
            context.driver().replace_user(UserId::new(7), user(1, "bob", true)).await.unwrap_err()
        );
        assert_eq!(vec![user(1, "alice", true)], context.users().await);
    }

    #[tokio::test]
    async fn test_delete_user_ok() {
        let context = TestContext::setup();

        context.driver().create_user(user(1, "alice", true)).await.unwrap();
        context.driver().create_user(user(2, "bob", true)).await.unwrap();

        context.driver().delete_user(UserId::new(2)).await.unwrap();

        assert_eq!(vec![user(1, "alice", true)], context.users().await);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let context = TestContext::setup();

        assert_eq!(
            DriverError::NotFound("User with id 9 not found".to_owned()),
            context.driver().delete_user(UserId::new(9)).await.unwrap_err()
        );
    }
}
