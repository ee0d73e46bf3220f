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

//! Operations on people.

use crate::db;
use crate::driver::{Driver, not_found_as};
use crate::model::*;
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Gets all people in the reference dataset.
    pub(crate) async fn get_people(self) -> DriverResult<Vec<Person>> {
        let mut tx = self.db.begin().await?;
        let people = db::get_people(tx.ex()).await?;
        tx.commit().await?;
        Ok(people)
    }

    /// Gets the person identified by `id`.
    pub(crate) async fn get_person(self, id: PersonId) -> DriverResult<Person> {
        let mut tx = self.db.begin().await?;
        let person = db::get_person(tx.ex(), id)
            .await
            .map_err(|e| not_found_as(e, || format!("Person {} not found", id)))?;
        tx.commit().await?;
        Ok(person)
    }
}
