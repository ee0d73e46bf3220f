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

//! API to add a person to the favorites of the configured user.

use crate::driver::Driver;
use crate::model::PersonId;
use crate::rest::records::MessageResponse;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, http};
use iii_iv_core::rest::RestError;

/// Message returned on success.
const MESSAGE: &str = "Character added to favorites";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, RestError> {
    let user_id = driver.favorites_user();
    driver.add_favorite_person(user_id, PersonId::from(id)).await?;

    Ok((http::StatusCode::CREATED, Json(MessageResponse::new(MESSAGE))))
}
