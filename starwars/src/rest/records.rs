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

//! Wire representation of the model types.
//!
//! Every entity maps to a flat JSON object whose field names are part of the public interface.

use crate::model::*;
use iii_iv_core::model::EmailAddress;
use serde::{Deserialize, Serialize};

/// Wire representation of a `User`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct UserRecord {
    /// Primary key.
    pub(crate) id: i32,

    /// Given name.
    pub(crate) first_name: String,

    /// Family name.
    pub(crate) last_name: String,

    /// Contact address.
    pub(crate) email: EmailAddress,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id().as_i32(),
            first_name: user.first_name().clone(),
            last_name: user.last_name().clone(),
            email: user.email().clone(),
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User::new(UserId::from(record.id), record.first_name, record.last_name, record.email)
    }
}

/// Wire representation of a `Person`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct PersonRecord {
    /// Primary key.
    pub(crate) people_id: i32,

    /// Full name.
    pub(crate) name: String,

    /// Height.
    pub(crate) height: f64,

    /// Weight.
    pub(crate) weight: f64,

    /// Hair color.
    pub(crate) hair_color: String,

    /// Eye color.
    pub(crate) eye_color: String,
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            people_id: person.id().as_i32(),
            name: person.name().clone(),
            height: *person.height(),
            weight: *person.weight(),
            hair_color: person.hair_color().clone(),
            eye_color: person.eye_color().clone(),
        }
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person::new(
            PersonId::from(record.people_id),
            record.name,
            record.height,
            record.weight,
            record.hair_color,
            record.eye_color,
        )
    }
}

/// Wire representation of a `Planet`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct PlanetRecord {
    /// Primary key.
    pub(crate) planet_id: i32,

    /// Name.
    pub(crate) name: String,

    /// Diameter.
    pub(crate) diameter: i32,

    /// Climate.
    pub(crate) climate: String,
}

impl From<Planet> for PlanetRecord {
    fn from(planet: Planet) -> Self {
        Self {
            planet_id: planet.id().as_i32(),
            name: planet.name().clone(),
            diameter: *planet.diameter(),
            climate: planet.climate().clone(),
        }
    }
}

impl From<PlanetRecord> for Planet {
    fn from(record: PlanetRecord) -> Self {
        Planet::new(PlanetId::from(record.planet_id), record.name, record.diameter, record.climate)
    }
}

/// Response body for operations that only report a human-readable outcome.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub(crate) struct MessageResponse {
    /// Description of the outcome.
    pub(crate) msg: String,
}

impl MessageResponse {
    /// Creates a new response carrying `msg`.
    pub(crate) fn new<S: Into<String>>(msg: S) -> Self {
        Self { msg: msg.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_record_field_names() {
        let user = User::new(
            UserId::from(3),
            "Leia".to_owned(),
            "Organa".to_owned(),
            EmailAddress::from("leia@example.com"),
        );
        let json = serde_json::to_value(UserRecord::from(user.clone())).unwrap();
        assert_eq!(
            json!({
                "id": 3,
                "first_name": "Leia",
                "last_name": "Organa",
                "email": "leia@example.com",
            }),
            json
        );
        assert_eq!(user, User::from(serde_json::from_value::<UserRecord>(json).unwrap()));
    }

    #[test]
    fn test_user_record_bad_email() {
        let json = json!({"id": 1, "first_name": "a", "last_name": "b", "email": "nope"});
        let err = serde_json::from_value::<UserRecord>(json).unwrap_err();
        assert!(err.to_string().contains("valid address"));
    }

    #[test]
    fn test_person_record_field_names() {
        let person = Person::new(
            PersonId::from(5),
            "Leia Organa".to_owned(),
            150.0,
            49.5,
            "brown".to_owned(),
            "brown".to_owned(),
        );
        let json = serde_json::to_value(PersonRecord::from(person.clone())).unwrap();
        assert_eq!(
            json!({
                "people_id": 5,
                "name": "Leia Organa",
                "height": 150.0,
                "weight": 49.5,
                "hair_color": "brown",
                "eye_color": "brown",
            }),
            json
        );
        assert_eq!(person, Person::from(serde_json::from_value::<PersonRecord>(json).unwrap()));
    }

    #[test]
    fn test_planet_record_field_names() {
        let planet =
            Planet::new(PlanetId::from(2), "Alderaan".to_owned(), 12500, "temperate".to_owned());
        let json = serde_json::to_value(PlanetRecord::from(planet.clone())).unwrap();
        assert_eq!(
            json!({
                "planet_id": 2,
                "name": "Alderaan",
                "diameter": 12500,
                "climate": "temperate",
            }),
            json
        );
        assert_eq!(planet, Planet::from(serde_json::from_value::<PlanetRecord>(json).unwrap()));
    }

    #[test]
    fn test_person_record_accepts_integral_numbers() {
        let json = json!({
            "people_id": 1,
            "name": "Luke",
            "height": 172,
            "weight": 77,
            "hair_color": "blond",
            "eye_color": "blue",
        });
        let record = serde_json::from_value::<PersonRecord>(json).unwrap();
        assert_eq!(172.0, record.height);
        assert_eq!(77.0, record.weight);
    }
}
