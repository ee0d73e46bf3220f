// III-IV
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

//! API to remove a person from the favorites of the configured user.

use crate::driver::Driver;
use crate::model::PersonId;
use crate::rest::records::MessageResponse;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;

/// Message returned on success.
pub(crate) const MESSAGE: &str = "Favorite removed";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, RestError> {
    let user_id = driver.favorites_user();
    driver.delete_favorite_person(user_id, PersonId::from(id)).await?;

    Ok(Json(MessageResponse::new(MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::DELETE, format!("/favorite/people/{}", id))
    }

    #[tokio::test]
    async fn test_ok_removes_one() {
        let context = TestContext::setup().await;

        context.create_favorites_user().await;
        let luke = context.create_person(1, "Luke Skywalker").await;
        let leia = context.create_person(5, "Leia Organa").await;
        context.add_favorite_person(*leia.id()).await;
        context.add_favorite_person(*luke.id()).await;
        context.add_favorite_person(*leia.id()).await;

        let response = OneShotBuilder::new(context.app(), route("5"))
            .send_empty()
            .await
            .expect_json::<MessageResponse>()
            .await;
        assert_eq!(MessageResponse::new(MESSAGE), response);

        assert_eq!(vec![luke, leia], context.get_favorite_people().await);
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        context.create_favorites_user().await;
        let luke = context.create_person(1, "Luke Skywalker").await;
        context.create_person(5, "Leia Organa").await;
        context.add_favorite_person(*luke.id()).await;

        OneShotBuilder::new(context.app(), route("5"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("Person 5 is not a favorite")
            .await;

        assert_eq!(vec![luke], context.get_favorite_people().await);
    }

    #[tokio::test]
    async fn test_unknown_person() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("123"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("not a favorite")
            .await;
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("1.5"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_text("Cannot parse")
            .await;
    }
}
