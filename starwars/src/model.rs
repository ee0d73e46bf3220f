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

//! High-level data types.
//!
//! These are plain records without any serialization logic.  The REST layer owns the mapping
//! of these types to their wire representation.

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display, From};
use iii_iv_core::model::EmailAddress;

/// Generates a newtype for the integer primary key of a table.
macro_rules! id_type [
    ( $(#[$attr:meta])* $name:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
        pub(crate) struct $name(i32);

        impl $name {
            /// Returns the raw value of the identifier as stored in the database.
            pub(crate) fn as_i32(self) -> i32 {
                self.0
            }
        }
    }
];

id_type!(
    /// Identifier of a user.
    UserId
);

id_type!(
    /// Identifier of a person (a character in the reference dataset).
    PersonId
);

id_type!(
    /// Identifier of a planet.
    PlanetId
);

id_type!(
    /// Identifier of the association between a user and a favorite person.
    FavoritePersonId
);

id_type!(
    /// Identifier of the association between a user and a favorite planet.
    FavoritePlanetId
);

/// A registered user of the service.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct User {
    /// Primary key.
    id: UserId,

    /// Given name.
    first_name: String,

    /// Family name.
    last_name: String,

    /// Contact address, unique across users.
    email: EmailAddress,
}

/// A character in the reference dataset.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct Person {
    /// Primary key.
    id: PersonId,

    /// Full name of the character.
    name: String,

    /// Height of the character.
    height: f64,

    /// Weight of the character.
    weight: f64,

    /// Hair color, free form.
    hair_color: String,

    /// Eye color, free form.
    eye_color: String,
}

/// A planet in the reference dataset.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct Planet {
    /// Primary key.
    id: PlanetId,

    /// Name of the planet.
    name: String,

    /// Diameter of the planet.
    diameter: i32,

    /// Climate description, free form.
    climate: String,
}

/// Association row linking a user to a favorite person.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct FavoritePerson {
    /// Primary key of the association itself.
    id: FavoritePersonId,

    /// The user that owns the favorite.
    user_id: UserId,

    /// The favorited person.
    person_id: PersonId,
}

/// Association row linking a user to a favorite planet.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct FavoritePlanet {
    /// Primary key of the association itself.
    id: FavoritePlanetId,

    /// The user that owns the favorite.
    user_id: UserId,

    /// The favorited planet.
    planet_id: PlanetId,
}

/// The favorite entities of a user, resolved to their full records.
///
/// Duplicate associations yield duplicate entries, in the order in which they were created.
#[derive(Constructor, Debug, Dissolve, PartialEq)]
pub(crate) struct Favorites {
    /// Favorite people.
    people: Vec<Person>,

    /// Favorite planets.
    planets: Vec<Planet>,
}

/// Reference data to load into an empty database.
#[derive(Constructor, Debug, Default, Dissolve, PartialEq)]
pub(crate) struct SeedData {
    /// Users to create.
    users: Vec<User>,

    /// People to create.
    people: Vec<Person>,

    /// Planets to create.
    planets: Vec<Planet>,
}
