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

//! Loading of reference data.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use iii_iv_core::db::DbError;
use iii_iv_core::driver::{DriverError, DriverResult};
use log::info;

/// Converts a database `AlreadyExists` error into a driver error that describes the duplicate
/// `what`, passing all other errors through.
fn already_exists_as(e: DbError, what: impl FnOnce() -> String) -> DriverError {
    match e {
        DbError::AlreadyExists => DriverError::AlreadyExists(what()),
        e => e.into(),
    }
}

impl Driver {
    /// Inserts all entities in `data` in a single transaction.
    ///
    /// Entities keep their explicit identifiers.  Any conflict with existing data aborts the whole
    /// operation without leaving partial changes behind.
    pub(crate) async fn seed(self, data: SeedData) -> DriverResult<()> {
        let (users, people, planets) = data.dissolve();

        let mut tx = self.db.begin().await?;
        for user in &users {
            db::create_user(tx.ex(), user).await.map_err(|e| {
                already_exists_as(e, || {
                    format!("User {} or email {} already exists", user.id(), user.email().as_str())
                })
            })?;
        }
        for person in &people {
            db::create_person(tx.ex(), person).await.map_err(|e| {
                already_exists_as(e, || format!("Person {} already exists", person.id()))
            })?;
        }
        for planet in &planets {
            db::create_planet(tx.ex(), planet).await.map_err(|e| {
                already_exists_as(e, || format!("Planet {} already exists", planet.id()))
            })?;
        }
        tx.commit().await?;

        info!(
            "Seeded {} users, {} people and {} planets",
            users.len(),
            people.len(),
            planets.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use iii_iv_core::model::EmailAddress;

    /// Creates a set of seed data with a few entities of each kind.
    fn sample_data() -> SeedData {
        SeedData::new(
            vec![User::new(
                UserId::from(1),
                "Luke".to_owned(),
                "Skywalker".to_owned(),
                EmailAddress::from("luke@example.com"),
            )],
            vec![
                Person::new(
                    PersonId::from(1),
                    "Luke Skywalker".to_owned(),
                    172.0,
                    77.0,
                    "blond".to_owned(),
                    "blue".to_owned(),
                ),
                Person::new(
                    PersonId::from(4),
                    "Darth Vader".to_owned(),
                    202.0,
                    136.0,
                    "none".to_owned(),
                    "yellow".to_owned(),
                ),
            ],
            vec![Planet::new(PlanetId::from(1), "Tatooine".to_owned(), 10465, "arid".to_owned())],
        )
    }

    #[tokio::test]
    async fn test_seed_ok() {
        let context = TestContext::setup().await;

        let (users, people, planets) = sample_data().dissolve();
        context
            .driver()
            .seed(SeedData::new(users.clone(), people.clone(), planets.clone()))
            .await
            .unwrap();

        assert_eq!(users, context.driver().get_users().await.unwrap());
        assert_eq!(people, context.driver().get_people().await.unwrap());
        assert_eq!(planets, context.driver().get_planets().await.unwrap());
    }

    #[tokio::test]
    async fn test_seed_empty() {
        let context = TestContext::setup().await;

        context.driver().seed(SeedData::default()).await.unwrap();

        assert!(context.driver().get_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_conflict_is_atomic() {
        let context = TestContext::setup().await;

        context.create_planet(1).await;

        assert_eq!(
            DriverError::AlreadyExists("Planet 1 already exists".to_owned()),
            context.driver().seed(sample_data()).await.unwrap_err()
        );

        assert!(context.driver().get_users().await.unwrap().is_empty());
        assert!(context.driver().get_people().await.unwrap().is_empty());
    }
}
