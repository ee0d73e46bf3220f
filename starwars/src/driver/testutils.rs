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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::{Driver, DriverOptions};
use crate::model::*;
use iii_iv_core::db::{Db, Executor};
use iii_iv_core::model::EmailAddress;
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver, for direct access during setup and verification.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver using an in-memory database and the default options.
    pub(crate) async fn setup() -> Self {
        Self::setup_with(DriverOptions::default()).await
    }

    /// Initializes the driver using an in-memory database and the given `opts`.
    pub(crate) async fn setup_with(opts: DriverOptions) -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(iii_iv_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone(), opts);
        Self { db, driver }
    }

    /// Obtains a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Returns a copy of the driver under test.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Creates a user whose attributes derive from its `id`.
    pub(crate) async fn create_user(&self, id: i32) -> User {
        let user = User::new(
            UserId::from(id),
            format!("First {}", id),
            format!("Last {}", id),
            EmailAddress::new(format!("user{}@example.com", id)).unwrap(),
        );
        db::create_user(&mut self.ex().await, &user).await.unwrap();
        user
    }

    /// Creates a person whose attributes derive from its `id`.
    pub(crate) async fn create_person(&self, id: i32) -> Person {
        let person = Person::new(
            PersonId::from(id),
            format!("Person {}", id),
            170.0 + f64::from(id),
            70.5,
            "black".to_owned(),
            "brown".to_owned(),
        );
        db::create_person(&mut self.ex().await, &person).await.unwrap();
        person
    }

    /// Creates a planet whose attributes derive from its `id`.
    pub(crate) async fn create_planet(&self, id: i32) -> Planet {
        let planet = Planet::new(
            PlanetId::from(id),
            format!("Planet {}", id),
            7000 + id,
            "frozen".to_owned(),
        );
        db::create_planet(&mut self.ex().await, &planet).await.unwrap();
        planet
    }

    /// Gets the people favorited by `user_id`, straight from the database.
    pub(crate) async fn get_favorite_people(&self, user_id: UserId) -> Vec<Person> {
        db::get_favorite_people(&mut self.ex().await, user_id).await.unwrap()
    }

    /// Gets the planets favorited by `user_id`, straight from the database.
    pub(crate) async fn get_favorite_planets(&self, user_id: UserId) -> Vec<Planet> {
        db::get_favorite_planets(&mut self.ex().await, user_id).await.unwrap()
    }
}
