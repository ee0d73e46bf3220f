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

//! Operations on the favorite lists of users.

use crate::db;
use crate::driver::{Driver, not_found_as};
use crate::model::*;
use iii_iv_core::driver::DriverResult;
use log::info;

impl Driver {
    /// Gets the people and planets favorited by `user_id`.
    pub(crate) async fn get_favorites(self, user_id: UserId) -> DriverResult<Favorites> {
        let mut tx = self.db.begin().await?;
        let people = db::get_favorite_people(tx.ex(), user_id).await?;
        let planets = db::get_favorite_planets(tx.ex(), user_id).await?;
        tx.commit().await?;
        Ok(Favorites::new(people, planets))
    }

    /// Adds `person_id` to the favorites of `user_id`.
    ///
    /// The person is not checked for existence upfront nor for being a favorite already: the
    /// database rejects dangling references and accepts duplicates.
    pub(crate) async fn add_favorite_person(
        self,
        user_id: UserId,
        person_id: PersonId,
    ) -> DriverResult<FavoritePerson> {
        let mut tx = self.db.begin().await?;
        let favorite = db::add_favorite_person(tx.ex(), user_id, person_id).await?;
        tx.commit().await?;
        info!("User {} added person {} to favorites", user_id, person_id);
        Ok(favorite)
    }

    /// Removes one occurrence of `person_id` from the favorites of `user_id`.
    pub(crate) async fn delete_favorite_person(
        self,
        user_id: UserId,
        person_id: PersonId,
    ) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        let favorite = db::find_favorite_person(tx.ex(), user_id, person_id).await.map_err(|e| {
            not_found_as(e, || {
                format!("Person {} is not a favorite of user {}", person_id, user_id)
            })
        })?;
        db::delete_favorite_person(tx.ex(), *favorite.id()).await?;
        tx.commit().await?;
        info!("User {} removed person {} from favorites", user_id, person_id);
        Ok(())
    }

    /// Adds `planet_id` to the favorites of `user_id`.
    ///
    /// Same as `add_favorite_person` but for planets.
    pub(crate) async fn add_favorite_planet(
        self,
        user_id: UserId,
        planet_id: PlanetId,
    ) -> DriverResult<FavoritePlanet> {
        let mut tx = self.db.begin().await?;
        let favorite = db::add_favorite_planet(tx.ex(), user_id, planet_id).await?;
        tx.commit().await?;
        info!("User {} added planet {} to favorites", user_id, planet_id);
        Ok(favorite)
    }

    /// Removes one occurrence of `planet_id` from the favorites of `user_id`.
    pub(crate) async fn delete_favorite_planet(
        self,
        user_id: UserId,
        planet_id: PlanetId,
    ) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        let favorite = db::find_favorite_planet(tx.ex(), user_id, planet_id).await.map_err(|e| {
            not_found_as(e, || {
                format!("Planet {} is not a favorite of user {}", planet_id, user_id)
            })
        })?;
        db::delete_favorite_planet(tx.ex(), *favorite.id()).await?;
        tx.commit().await?;
        info!("User {} removed planet {} from favorites", user_id, planet_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use iii_iv_core::driver::DriverError;

    #[tokio::test]
    async fn test_get_favorites_empty() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        context.create_person(1).await;
        context.create_planet(1).await;

        let favorites = context.driver().get_favorites(*user.id()).await.unwrap();
        assert_eq!(Favorites::new(vec![], vec![]), favorites);
    }

    #[tokio::test]
    async fn test_get_favorites_resolves_entities() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        let other = context.create_user(2).await;
        let person = context.create_person(5).await;
        let planet1 = context.create_planet(1).await;
        let planet2 = context.create_planet(2).await;

        let driver = context.driver();
        driver.clone().add_favorite_person(*user.id(), *person.id()).await.unwrap();
        driver.clone().add_favorite_planet(*user.id(), *planet2.id()).await.unwrap();
        driver.clone().add_favorite_planet(*user.id(), *planet1.id()).await.unwrap();
        driver.clone().add_favorite_planet(*other.id(), *planet1.id()).await.unwrap();

        let favorites = driver.clone().get_favorites(*user.id()).await.unwrap();
        assert_eq!(Favorites::new(vec![person], vec![planet2, planet1.clone()]), favorites);

        let favorites = driver.get_favorites(*other.id()).await.unwrap();
        assert_eq!(Favorites::new(vec![], vec![planet1]), favorites);
    }

    #[tokio::test]
    async fn test_add_favorite_person_duplicates() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        let person = context.create_person(5).await;

        let fav1 = context.driver().add_favorite_person(*user.id(), *person.id()).await.unwrap();
        let fav2 = context.driver().add_favorite_person(*user.id(), *person.id()).await.unwrap();
        assert_ne!(fav1.id(), fav2.id());

        assert_eq!(vec![person.clone(), person], context.get_favorite_people(*user.id()).await);
    }

    #[tokio::test]
    async fn test_add_favorite_person_unknown_person() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;

        match context.driver().add_favorite_person(*user.id(), PersonId::from(5)).await {
            Err(DriverError::BackendError(_)) => (),
            e => panic!("{:?}", e),
        }
        assert!(context.get_favorite_people(*user.id()).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_favorite_person_removes_one() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        let person1 = context.create_person(1).await;
        let person2 = context.create_person(2).await;

        let driver = context.driver();
        driver.clone().add_favorite_person(*user.id(), *person1.id()).await.unwrap();
        driver.clone().add_favorite_person(*user.id(), *person2.id()).await.unwrap();
        driver.clone().add_favorite_person(*user.id(), *person1.id()).await.unwrap();

        driver.delete_favorite_person(*user.id(), *person1.id()).await.unwrap();

        assert_eq!(vec![person2, person1], context.get_favorite_people(*user.id()).await);
    }

    #[tokio::test]
    async fn test_delete_favorite_person_not_found() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        let other = context.create_user(2).await;
        let person = context.create_person(5).await;

        context.driver().add_favorite_person(*other.id(), *person.id()).await.unwrap();

        assert_eq!(
            DriverError::NotFound("Person 5 is not a favorite of user 1".to_owned()),
            context.driver().delete_favorite_person(*user.id(), *person.id()).await.unwrap_err()
        );
        assert_eq!(vec![person], context.get_favorite_people(*other.id()).await);
    }

    #[tokio::test]
    async fn test_add_favorite_planet_duplicates() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        let planet = context.create_planet(3).await;

        context.driver().add_favorite_planet(*user.id(), *planet.id()).await.unwrap();
        context.driver().add_favorite_planet(*user.id(), *planet.id()).await.unwrap();

        assert_eq!(vec![planet.clone(), planet], context.get_favorite_planets(*user.id()).await);
    }

    #[tokio::test]
    async fn test_add_favorite_planet_unknown_user() {
        let context = TestContext::setup().await;

        let planet = context.create_planet(3).await;

        match context.driver().add_favorite_planet(UserId::from(1), *planet.id()).await {
            Err(DriverError::BackendError(_)) => (),
            e => panic!("{:?}", e),
        }
    }

    #[tokio::test]
    async fn test_delete_favorite_planet_ok() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        let planet = context.create_planet(3).await;

        context.driver().add_favorite_planet(*user.id(), *planet.id()).await.unwrap();
        context.driver().add_favorite_planet(*user.id(), *planet.id()).await.unwrap();

        context.driver().delete_favorite_planet(*user.id(), *planet.id()).await.unwrap();
        assert_eq!(vec![planet.clone()], context.get_favorite_planets(*user.id()).await);

        context.driver().delete_favorite_planet(*user.id(), *planet.id()).await.unwrap();
        assert!(context.get_favorite_planets(*user.id()).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_favorite_planet_not_found() {
        let context = TestContext::setup().await;

        let user = context.create_user(1).await;
        let planet = context.create_planet(3).await;

        assert_eq!(
            DriverError::NotFound("Planet 3 is not a favorite of user 1".to_owned()),
            context.driver().delete_favorite_planet(*user.id(), *planet.id()).await.unwrap_err()
        );
    }
}
