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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::{Driver, DriverOptions};
use crate::model::*;
use crate::rest::app;
use axum::Router;
use iii_iv_core::db::{Db, Executor};
use iii_iv_core::model::EmailAddress;
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the app, for direct access during setup and verification.
    db: Arc<dyn Db + Send + Sync>,

    /// The user whose favorites the app manages.
    favorites_user: UserId,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app using an in-memory database and the default options.
    pub(crate) async fn setup() -> Self {
        Self::setup_with(DriverOptions::default()).await
    }

    /// Initializes the app using an in-memory database and the given `opts`.
    pub(crate) async fn setup_with(opts: DriverOptions) -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(iii_iv_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let favorites_user = opts.favorites_user;
        let driver = Driver::new(db.clone(), opts);
        let app = app(driver);
        Self { db, favorites_user, app }
    }

    /// Returns a copy of the app under test.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app under test.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Returns the user whose favorites the app manages.
    pub(crate) fn favorites_user(&self) -> UserId {
        self.favorites_user
    }

    /// Obtains a direct executor against the database.
    async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Creates a user whose names derive from its `id`.
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

    /// Creates the user whose favorites the app manages.
    pub(crate) async fn create_favorites_user(&self) -> User {
        self.create_user(self.favorites_user.as_i32()).await
    }

    /// Creates a person with the given `name` and attributes derived from its `id`.
    pub(crate) async fn create_person(&self, id: i32, name: &str) -> Person {
        let person = Person::new(
            PersonId::from(id),
            name.to_owned(),
            100.0 + f64::from(id) / 4.0,
            45.5,
            "auburn".to_owned(),
            "hazel".to_owned(),
        );
        db::create_person(&mut self.ex().await, &person).await.unwrap();
        person
    }

    /// Creates a planet with the given `name` and attributes derived from its `id`.
    pub(crate) async fn create_planet(&self, id: i32, name: &str) -> Planet {
        let planet =
            Planet::new(PlanetId::from(id), name.to_owned(), 5000 + id, "murky".to_owned());
        db::create_planet(&mut self.ex().await, &planet).await.unwrap();
        planet
    }

    /// Adds `person_id` to the favorites of the configured user, bypassing the app.
    pub(crate) async fn add_favorite_person(&self, person_id: PersonId) {
        let mut ex = self.ex().await;
        db::add_favorite_person(&mut ex, self.favorites_user, person_id).await.unwrap();
    }

    /// Adds `planet_id` to the favorites of the configured user, bypassing the app.
    pub(crate) async fn add_favorite_planet(&self, planet_id: PlanetId) {
        let mut ex = self.ex().await;
        db::add_favorite_planet(&mut ex, self.favorites_user, planet_id).await.unwrap();
    }

    /// Gets the favorite people of the configured user, bypassing the app.
    pub(crate) async fn get_favorite_people(&self) -> Vec<Person> {
        db::get_favorite_people(&mut self.ex().await, self.favorites_user).await.unwrap()
    }

    /// Gets the favorite planets of the configured user, bypassing the app.
    pub(crate) async fn get_favorite_planets(&self) -> Vec<Planet> {
        db::get_favorite_planets(&mut self.ex().await, self.favorites_user).await.unwrap()
    }
}
