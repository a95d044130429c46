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

//! Entry point to the REST server.

use crate::db::CatalogTx;
use crate::driver::Driver;
use axum::Router;
use catalog_core::db::Db;
use catalog_core::rest::RestError;

mod item_delete;
mod item_get;
mod item_put;
mod items_get;
mod items_post;
mod root_get;
#[cfg(test)]
mod testutils;
mod user_delete;
mod user_get;
mod user_put;
mod users_get;
mod users_post;

/// Fallback handler for any request that does not match a known route.
async fn not_found() -> RestError {
    RestError::NotFound("Not Found".to_owned())
}

/// Creates the router for the items resource.
fn items_router<D>() -> Router<Driver<D>>
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    use axum::routing::get;
    let collection = get(items_get::handler::<D>).post(items_post::handler::<D>);
    Router::new()
        .route("/items", collection.clone())
        .route("/items/", collection)
        .route(
            "/items/:id",
            get(item_get::handler::<D>)
                .put(item_put::handler::<D>)
                .delete(item_delete::handler::<D>),
        )
}

/// Creates the router for the users resource.
fn users_router<D>() -> Router<Driver<D>>
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    use axum::routing::get;
    let collection = get(users_get::handler::<D>).post(users_post::handler::<D>);
    Router::new()
        .route("/users", collection.clone())
        .route("/users/", collection)
        .route(
            "/users/:id",
            get(user_get::handler::<D>)
                .put(user_put::handler::<D>)
                .delete(user_delete::handler::<D>),
        )
}

/// Creates the router for the application.
pub(crate) fn app<D>(driver: Driver<D>) -> Router
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    use axum::routing::get;
    Router::new()
        .route("/", get(root_get::handler))
        .merge(items_router::<D>())
        .merge(users_router::<D>())
        .fallback(not_found)
        .with_state(driver)
}

#[cfg(test)]
mod tests {
    use super::testutils::*;
    use crate::model::*;
    use axum::http::{Method, StatusCode};
    use catalog_core::rest::testutils::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_unknown_route() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.into_app(), (Method::GET, "/widgets"))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("Not Found")
            .await;
    }

    #[tokio::test]
    async fn test_e2e_items_scenario() {
        let context = TestContext::setup_seeded().await;

        let response = OneShotBuilder::new(context.app(), (Method::GET, "/items/2"))
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(json!({"id": 2, "name": "Item 2"}), response);

        OneShotBuilder::new(context.app(), (Method::POST, "/items/"))
            .send_json(json!({"id": 2, "name": "Again", "price": 1.0}))
            .await
            .expect_status(StatusCode::BAD_REQUEST)
            .expect_error("Item with id 2 already exists")
            .await;

        OneShotBuilder::new(context.app(), (Method::DELETE, "/items/1"))
            .send_empty()
            .await
            .expect_status(StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        OneShotBuilder::new(context.app(), (Method::GET, "/items/1"))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("Item with id 1 not found")
            .await;

        let response = OneShotBuilder::new(context.app(), (Method::GET, "/items/"))
            .send_empty()
            .await
            .expect_json::<Vec<ItemResponse>>()
            .await;
        assert_eq!(
            vec![
                ItemResponse::new(ItemId::new(2), "Item 2".to_owned()),
                ItemResponse::new(ItemId::new(3), "Item 3".to_owned()),
            ],
            response
        );
    }

    #[tokio::test]
    async fn test_e2e_users_scenario() {
        let context = TestContext::setup_seeded().await;

        OneShotBuilder::new(context.app(), (Method::POST, "/users/"))
            .send_json(json!({"id": 4, "username": "ab", "email": "ab@example.com"}))
            .await
            .expect_status(StatusCode::UNPROCESSABLE_ENTITY)
            .expect_error("Username must have at least 3 characters")
            .await;
        assert!(context.get_user(4).await.is_none());

        let response = OneShotBuilder::new(context.app(), (Method::POST, "/users/"))
            .send_json(json!({"id": 4, "username": "alice", "email": "alice@example.com"}))
            .await
            .expect_status(StatusCode::CREATED)
            .expect_json::<UserResponse>()
            .await;
        assert_eq!(UserResponse::new(UserId::new(4), None), response);

        let response = OneShotBuilder::new(context.app(), (Method::PUT, "/users/4"))
            .send_json(json!({
                "id": 4,
                "username": "alice",
                "email": "alice@example.com",
                "full_name": "Alice Liddell",
            }))
            .await
            .expect_json::<UserResponse>()
            .await;
        let exp_response =
            UserResponse::new(UserId::new(4), Some(FullName::new("Alice Liddell").unwrap()));
        assert_eq!(exp_response, response);

        let response = OneShotBuilder::new(context.app(), (Method::GET, "/users/4"))
            .send_empty()
            .await
            .expect_json::<UserResponse>()
            .await;
        assert_eq!(exp_response, response);

        let response = OneShotBuilder::new(context.app(), (Method::GET, "/users"))
            .send_empty()
            .await
            .expect_json::<Vec<serde_json::Value>>()
            .await;
        assert_eq!(
            vec![
                json!({"id": 1, "full_name": "John Doe"}),
                json!({"id": 2, "full_name": "Jane Smith"}),
                json!({"id": 3, "full_name": null}),
                json!({"id": 4, "full_name": "Alice Liddell"}),
            ],
            response
        );
    }
}
