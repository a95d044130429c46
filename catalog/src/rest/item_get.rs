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

//! API to get a single item.

use crate::db::CatalogTx;
use crate::driver::Driver;
use crate::model::{ItemId, ItemResponse};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use catalog_core::db::Db;
use catalog_core::rest::{EmptyBody, PathParam, RestError};

/// API handler.
pub(crate) async fn handler<D>(
    State(driver): State<Driver<D>>,
    PathParam(id): PathParam<ItemId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError>
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    let item = driver.get_item(id).await?;
    Ok(Json(ItemResponse::from(item)))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use catalog_core::rest::testutils::*;

    fn route(id: i64) -> (http::Method, String) {
        (http::Method::GET, format!("/items/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        context.create_item(1, "first", 1.0).await;
        context.create_item(2, "second", 2.0).await;

        let response = OneShotBuilder::new(context.into_app(), route(2))
            .send_empty()
            .await
            .expect_json::<ItemResponse>()
            .await;
        assert_eq!(ItemResponse::new(ItemId::new(2), "second".to_owned()), response);
    }

    #[tokio::test]
    async fn test_seeded() {
        let context = TestContext::setup_seeded().await;

        let response = OneShotBuilder::new(context.into_app(), route(2))
            .send_empty()
            .await
            .take_body_as_text()
            .await;
        assert_eq!(r#"{"id":2,"name":"Item 2"}"#, response);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup();

        context.create_item(1, "first", 1.0).await;

        OneShotBuilder::new(context.into_app(), route(5))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("Item with id 5 not found")
            .await;
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.into_app(), (http::Method::GET, "/items/abc"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::UNPROCESSABLE_ENTITY)
            .expect_error("Cannot parse")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route(1));
}
