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

//! Database abstraction in terms of the operations needed by the service.
//!
//! Every query in this module is valid for both backends: SQLite accepts the `$N` placeholder
//! syntax used by PostgreSQL.

use crate::model::*;
use futures::TryStreamExt;
use iii_iv_core::db::postgres;
use iii_iv_core::db::sqlite;
use iii_iv_core::db::{DbError, DbResult, Executor, ensure_one_upsert};
use iii_iv_core::model::EmailAddress;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;


/// Initializes the database schema.
///
/// The schema only creates missing objects so this is safe to call on every startup.
pub(crate) async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

/// Implements the conversions from the rows returned by one backend into our model types.
macro_rules! impl_try_from_row [
    ( $row:ty, $map_err:path ) => {
        impl TryFrom<$row> for User {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let id: i32 = row.try_get("id").map_err($map_err)?;
                let first_name: String = row.try_get("first_name").map_err($map_err)?;
                let last_name: String = row.try_get("last_name").map_err($map_err)?;
                let email: String = row.try_get("email").map_err($map_err)?;

                Ok(User::new(UserId::from(id), first_name, last_name, EmailAddress::new(email)?))
            }
        }

        impl TryFrom<$row> for Person {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let id: i32 = row.try_get("people_id").map_err($map_err)?;
                let name: String = row.try_get("name").map_err($map_err)?;
                let height: f64 = row.try_get("height").map_err($map_err)?;
                let weight: f64 = row.try_get("weight").map_err($map_err)?;
                let hair_color: String = row.try_get("hair_color").map_err($map_err)?;
                let eye_color: String = row.try_get("eye_color").map_err($map_err)?;

                Ok(Person::new(PersonId::from(id), name, height, weight, hair_color, eye_color))
            }
        }

        impl TryFrom<$row> for Planet {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let id: i32 = row.try_get("planet_id").map_err($map_err)?;
                let name: String = row.try_get("name").map_err($map_err)?;
                let diameter: i32 = row.try_get("diameter").map_err($map_err)?;
                let climate: String = row.try_get("climate").map_err($map_err)?;

                Ok(Planet::new(PlanetId::from(id), name, diameter, climate))
            }
        }

        impl TryFrom<$row> for FavoritePerson {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let id: i32 = row.try_get("favpeople_id").map_err($map_err)?;
                let user_id: i32 = row.try_get("user_id").map_err($map_err)?;
                let person_id: i32 = row.try_get("people_id").map_err($map_err)?;

                Ok(FavoritePerson::new(
                    FavoritePersonId::from(id),
                    UserId::from(user_id),
                    PersonId::from(person_id),
                ))
            }
        }

        impl TryFrom<$row> for FavoritePlanet {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let id: i32 = row.try_get("favplanets_id").map_err($map_err)?;
                let user_id: i32 = row.try_get("user_id").map_err($map_err)?;
                let planet_id: i32 = row.try_get("planet_id").map_err($map_err)?;

                Ok(FavoritePlanet::new(
                    FavoritePlanetId::from(id),
                    UserId::from(user_id),
                    PlanetId::from(planet_id),
                ))
            }
        }
    }
];

impl_try_from_row!(PgRow, postgres::map_sqlx_error);
impl_try_from_row!(SqliteRow, sqlite::map_sqlx_error);

/// Runs `query_str` with the integer `args` bound in order and converts all returned rows.
async fn fetch_all<T>(ex: &mut Executor, query_str: &str, args: &[i32]) -> DbResult<Vec<T>>
where
    T: TryFrom<PgRow, Error = DbError> + TryFrom<SqliteRow, Error = DbError>,
{
    let mut items = vec![];
    match ex {
        Executor::Postgres(ex) => {
            let mut query = sqlx::query(query_str);
            for arg in args {
                query = query.bind(*arg);
            }
            let mut rows = query.fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                items.push(<T as TryFrom<PgRow>>::try_from(row)?);
            }
        }

        Executor::Sqlite(ex) => {
            let mut query = sqlx::query(query_str);
            for arg in args {
                query = query.bind(*arg);
            }
            let mut rows = query.fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                items.push(<T as TryFrom<SqliteRow>>::try_from(row)?);
            }
        }
    }
    Ok(items)
}

/// Runs `query_str` with the integer `args` bound in order and converts the only returned row.
///
/// Returns `NotFound` if the query does not return any rows.
async fn fetch_one<T>(ex: &mut Executor, query_str: &str, args: &[i32]) -> DbResult<T>
where
    T: TryFrom<PgRow, Error = DbError> + TryFrom<SqliteRow, Error = DbError>,
{
    match ex {
        Executor::Postgres(ex) => {
            let mut query = sqlx::query(query_str);
            for arg in args {
                query = query.bind(*arg);
            }
            let row = query.fetch_one(&mut **ex).await.map_err(postgres::map_sqlx_error)?;
            <T as TryFrom<PgRow>>::try_from(row)
        }

        Executor::Sqlite(ex) => {
            let mut query = sqlx::query(query_str);
            for arg in args {
                query = query.bind(*arg);
            }
            let row = query.fetch_one(&mut **ex).await.map_err(sqlite::map_sqlx_error)?;
            <T as TryFrom<SqliteRow>>::try_from(row)
        }
    }
}

/// Runs the deletion `query_str` with the integer `args` bound in order.
///
/// Returns `NotFound` if no rows were deleted.
async fn delete_one(ex: &mut Executor, query_str: &str, args: &[i32]) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => {
            let mut query = sqlx::query(query_str);
            for arg in args {
                query = query.bind(*arg);
            }
            query.execute(&mut **ex).await.map_err(postgres::map_sqlx_error)?.rows_affected()
        }

        Executor::Sqlite(ex) => {
            let mut query = sqlx::query(query_str);
            for arg in args {
                query = query.bind(*arg);
            }
            query.execute(&mut **ex).await.map_err(sqlite::map_sqlx_error)?.rows_affected()
        }
    };
    if rows_affected == 0 {
        return Err(DbError::NotFound);
    }
    ensure_one_upsert(rows_affected)
}

/// Creates a new `user` keeping its explicit identifier.
pub(crate) async fn create_user(ex: &mut Executor, user: &User) -> DbResult<()> {
    let query_str = "INSERT INTO users (id, first_name, last_name, email) VALUES ($1, $2, $3, $4)";
    let rows_affected = match ex {
        Executor::Postgres(ex) => sqlx::query(query_str)
            .bind(user.id().as_i32())
            .bind(user.first_name())
            .bind(user.last_name())
            .bind(user.email().as_str())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        Executor::Sqlite(ex) => sqlx::query(query_str)
            .bind(user.id().as_i32())
            .bind(user.first_name())
            .bind(user.last_name())
            .bind(user.email().as_str())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),
    };
    ensure_one_upsert(rows_affected)
}

/// Creates a new `person` keeping its explicit identifier.
pub(crate) async fn create_person(ex: &mut Executor, person: &Person) -> DbResult<()> {
    let query_str = "
        INSERT INTO people (people_id, name, height, weight, hair_color, eye_color)
        VALUES ($1, $2, $3, $4, $5, $6)";
    let rows_affected = match ex {
        Executor::Postgres(ex) => sqlx::query(query_str)
            .bind(person.id().as_i32())
            .bind(person.name())
            .bind(*person.height())
            .bind(*person.weight())
            .bind(person.hair_color())
            .bind(person.eye_color())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        Executor::Sqlite(ex) => sqlx::query(query_str)
            .bind(person.id().as_i32())
            .bind(person.name())
            .bind(*person.height())
            .bind(*person.weight())
            .bind(person.hair_color())
            .bind(person.eye_color())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),
    };
    ensure_one_upsert(rows_affected)
}

/// Creates a new `planet` keeping its explicit identifier.
pub(crate) async fn create_planet(ex: &mut Executor, planet: &Planet) -> DbResult<()> {
    let query_str =
        "INSERT INTO planets (planet_id, name, diameter, climate) VALUES ($1, $2, $3, $4)";
    let rows_affected = match ex {
        Executor::Postgres(ex) => sqlx::query(query_str)
            .bind(planet.id().as_i32())
            .bind(planet.name())
            .bind(*planet.diameter())
            .bind(planet.climate())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        Executor::Sqlite(ex) => sqlx::query(query_str)
            .bind(planet.id().as_i32())
            .bind(planet.name())
            .bind(*planet.diameter())
            .bind(planet.climate())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),
    };
    ensure_one_upsert(rows_affected)
}

/// Gets all users sorted by their identifier.
pub(crate) async fn get_users(ex: &mut Executor) -> DbResult<Vec<User>> {
    fetch_all(ex, "SELECT * FROM users ORDER BY id", &[]).await
}

/// Gets all people sorted by their identifier.
pub(crate) async fn get_people(ex: &mut Executor) -> DbResult<Vec<Person>> {
    fetch_all(ex, "SELECT * FROM people ORDER BY people_id", &[]).await
}

/// Gets the person identified by `id`.
pub(crate) async fn get_person(ex: &mut Executor, id: PersonId) -> DbResult<Person> {
    fetch_one(ex, "SELECT * FROM people WHERE people_id = $1", &[id.as_i32()]).await
}

/// Gets all planets sorted by their identifier.
pub(crate) async fn get_planets(ex: &mut Executor) -> DbResult<Vec<Planet>> {
    fetch_all(ex, "SELECT * FROM planets ORDER BY planet_id", &[]).await
}

/// Gets the planet identified by `id`.
pub(crate) async fn get_planet(ex: &mut Executor, id: PlanetId) -> DbResult<Planet> {
    fetch_one(ex, "SELECT * FROM planets WHERE planet_id = $1", &[id.as_i32()]).await
}

/// Gets the people favorited by `user_id` in the order in which they were added.
pub(crate) async fn get_favorite_people(
    ex: &mut Executor,
    user_id: UserId,
) -> DbResult<Vec<Person>> {
    let query_str = "
        SELECT people.*
        FROM favpeople JOIN people ON favpeople.people_id = people.people_id
        WHERE favpeople.user_id = $1
        ORDER BY favpeople.favpeople_id";
    fetch_all(ex, query_str, &[user_id.as_i32()]).await
}

/// Gets the planets favorited by `user_id` in the order in which they were added.
pub(crate) async fn get_favorite_planets(
    ex: &mut Executor,
    user_id: UserId,
) -> DbResult<Vec<Planet>> {
    let query_str = "
        SELECT planets.*
        FROM favplanets JOIN planets ON favplanets.planet_id = planets.planet_id
        WHERE favplanets.user_id = $1
        ORDER BY favplanets.favplanets_id";
    fetch_all(ex, query_str, &[user_id.as_i32()]).await
}

/// Records that `user_id` likes `person_id`, even if it already did.
pub(crate) async fn add_favorite_person(
    ex: &mut Executor,
    user_id: UserId,
    person_id: PersonId,
) -> DbResult<FavoritePerson> {
    let query_str = "
        INSERT INTO favpeople (user_id, people_id) VALUES ($1, $2)
        RETURNING favpeople_id, user_id, people_id";
    fetch_one(ex, query_str, &[user_id.as_i32(), person_id.as_i32()]).await
}

/// Records that `user_id` likes `planet_id`, even if it already did.
pub(crate) async fn add_favorite_planet(
    ex: &mut Executor,
    user_id: UserId,
    planet_id: PlanetId,
) -> DbResult<FavoritePlanet> {
    let query_str = "
        INSERT INTO favplanets (user_id, planet_id) VALUES ($1, $2)
        RETURNING favplanets_id, user_id, planet_id";
    fetch_one(ex, query_str, &[user_id.as_i32(), planet_id.as_i32()]).await
}

/// Finds the oldest association between `user_id` and `person_id`.
pub(crate) async fn find_favorite_person(
    ex: &mut Executor,
    user_id: UserId,
    person_id: PersonId,
) -> DbResult<FavoritePerson> {
    let query_str = "
        SELECT favpeople_id, user_id, people_id FROM favpeople
        WHERE user_id = $1 AND people_id = $2
        ORDER BY favpeople_id
        LIMIT 1";
    fetch_one(ex, query_str, &[user_id.as_i32(), person_id.as_i32()]).await
}

/// Finds the oldest association between `user_id` and `planet_id`.
pub(crate) async fn find_favorite_planet(
    ex: &mut Executor,
    user_id: UserId,
    planet_id: PlanetId,
) -> DbResult<FavoritePlanet> {
    let query_str = "
        SELECT favplanets_id, user_id, planet_id FROM favplanets
        WHERE user_id = $1 AND planet_id = $2
        ORDER BY favplanets_id
        LIMIT 1";
    fetch_one(ex, query_str, &[user_id.as_i32(), planet_id.as_i32()]).await
}

/// Deletes the single person association identified by `id`.
pub(crate) async fn delete_favorite_person(
    ex: &mut Executor,
    id: FavoritePersonId,
) -> DbResult<()> {
    delete_one(ex, "DELETE FROM favpeople WHERE favpeople_id = $1", &[id.as_i32()]).await
}

/// Deletes the single planet association identified by `id`.
pub(crate) async fn delete_favorite_planet(
    ex: &mut Executor,
    id: FavoritePlanetId,
) -> DbResult<()> {
    delete_one(ex, "DELETE FROM favplanets WHERE favplanets_id = $1", &[id.as_i32()]).await
}
