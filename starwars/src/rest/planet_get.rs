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

//! API to get the details of one planet.

use crate::driver::Driver;
use crate::model::PlanetId;
use crate::rest::records::PlanetRecord;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

/// Message returned on success.
const MESSAGE: &str = "Planet details";

/// Response body.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub(crate) struct PlanetResponse {
    /// Description of the outcome.
    msg: String,

    /// The requested planet.
    planet: PlanetRecord,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, RestError> {
    let planet = driver.get_planet(PlanetId::from(id)).await?;

    Ok(Json(PlanetResponse { msg: MESSAGE.to_owned(), planet: planet.into() }))
}
