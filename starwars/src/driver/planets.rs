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

//! Operations on planets.

use crate::db;
use crate::driver::{Driver, not_found_as};
use crate::model::*;
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Gets all planets in the reference dataset.
    pub(crate) async fn get_planets(self) -> DriverResult<Vec<Planet>> {
        let mut tx = self.db.begin().await?;
        let planets = db::get_planets(tx.ex()).await?;
        tx.commit().await?;
        Ok(planets)
    }

    /// Gets the planet identified by `id`.
    pub(crate) async fn get_planet(self, id: PlanetId) -> DriverResult<Planet> {
        let mut tx = self.db.begin().await?;
        let planet = db::get_planet(tx.ex(), id)
            .await
            .map_err(|e| not_found_as(e, || format!("Planet {} not found", id)))?;
        tx.commit().await?;
        Ok(planet)
    }
}
