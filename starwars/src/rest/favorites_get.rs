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

//! API to list the favorites of the configured user.

use crate::driver::Driver;
use crate::rest::records::{PersonRecord, PlanetRecord};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

/// Response body.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub(crate) struct FavoritesResponse {
    /// Description of the outcome.
    msg: String,

    /// Favorite people, with duplicates, in the order in which they were added.
    people_favorites: Vec<PersonRecord>,

    /// Favorite planets, with duplicates, in the order in which they were added.
    planets_favorites: Vec<PlanetRecord>,
}

/// API handler.
pub(crate) async fn handler(State(driver): State<Driver>) -> Result<impl IntoResponse, RestError> {
    let user_id = driver.favorites_user();
    let (people, planets) = driver.get_favorites(user_id).await?.dissolve();

    Ok(Json(FavoritesResponse {
        msg: format!("Favorites of user {}", user_id),
        people_favorites: people.into_iter().map(PersonRecord::from).collect(),
        planets_favorites: planets.into_iter().map(PlanetRecord::from).collect(),
    }))
}
