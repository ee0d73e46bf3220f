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

//! API to list all planets.

use crate::driver::Driver;
use crate::rest::records::PlanetRecord;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

/// Message returned on success.
const MESSAGE: &str = "Planet List";

/// Response body.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub(crate) struct PlanetsResponse {
    /// Description of the outcome.
    msg: String,

    /// All planets sorted by their identifier.
    planets: Vec<PlanetRecord>,
}

/// API handler.
pub(crate) async fn handler(State(driver): State<Driver>) -> Result<impl IntoResponse, RestError> {
    let planets = driver.get_planets().await?;

    Ok(Json(PlanetsResponse {
        msg: MESSAGE.to_owned(),
        planets: planets.into_iter().map(PlanetRecord::from).collect(),
    }))
}
