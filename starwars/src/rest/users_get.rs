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

//! API to list all users.

use crate::driver::Driver;
use crate::rest::records::UserRecord;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

/// Message returned on success.
const MESSAGE: &str = "List of users";

/// Response body.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub(crate) struct UsersResponse {
    /// Description of the outcome.
    msg: String,

    /// All users sorted by their identifier.
    users: Vec<UserRecord>,
}

/// API handler.
pub(crate) async fn handler(State(driver): State<Driver>) -> Result<impl IntoResponse, RestError> {
    let users = driver.get_users().await?;

    Ok(Json(UsersResponse {
        msg: MESSAGE.to_owned(),
        users: users.into_iter().map(UserRecord::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/users".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let user3 = context.create_user(3).await;
        let user1 = context.create_user(1).await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<UsersResponse>()
            .await;
        let exp_response =
            UsersResponse { msg: MESSAGE.to_owned(), users: vec![user1.into(), user3.into()] };
        assert_eq!(exp_response, response);
    }

    #[tokio::test]
    async fn test_wire_format() {
        let context = TestContext::setup().await;

        context.create_user(7).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        let exp_response = serde_json::json!({
            "msg": "List of users",
            "users": [{
                "id": 7,
                "first_name": "First 7",
                "last_name": "Last 7",
                "email": "user7@example.com",
            }],
        });
        assert_eq!(exp_response, response);
    }
}
