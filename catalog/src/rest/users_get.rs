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

//! API to list all users.

use crate::db::CatalogTx;
use crate::driver::Driver;
use crate::model::UserResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use catalog_core::db::Db;
use catalog_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler<D>(
    State(driver): State<Driver<D>>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError>
where
    D: Db + Clone + Send + Sync + 'static,
    D::Tx: CatalogTx + Send + Sync + 'static,
{
    let users = driver.get_users().await?;
    let response = users.into_iter().map(UserResponse::from).collect::<Vec<UserResponse>>();
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use catalog_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/users/".to_owned())
    }

    #[tokio::test]
    async fn test_empty() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<UserResponse>>()
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_projection() {
        let context = TestContext::setup();

        context.create_user(8, "grace", Some("Grace Hopper")).await;
        context.create_user(3, "anon", None).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .take_body_as_text()
            .await;
        assert_eq!(r#"[{"id":8,"full_name":"Grace Hopper"},{"id":3,"full_name":null}]"#, response);
    }

    #[tokio::test]
    async fn test_without_trailing_slash() {
        let context = TestContext::setup_seeded().await;

        let response = OneShotBuilder::new(context.into_app(), (http::Method::GET, "/users"))
            .send_empty()
            .await
            .expect_json::<Vec<UserResponse>>()
            .await;
        assert_eq!(
            vec![
                UserResponse::new(UserId::new(1), Some(FullName::new("John Doe").unwrap())),
                UserResponse::new(UserId::new(2), Some(FullName::new("Jane Smith").unwrap())),
                UserResponse::new(UserId::new(3), None),
            ],
            response
        );
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route());
}
