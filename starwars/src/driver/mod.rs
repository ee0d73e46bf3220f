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

//! Business logic for the service.

use crate::model::UserId;
use iii_iv_core::db::{Db, DbError};
use iii_iv_core::driver::DriverError;
use iii_iv_core::env::get_optional_var;
use log::debug;
use std::sync::Arc;

mod favorites;
mod people;
mod planets;
mod seed;
#[cfg(test)]
pub(crate) mod testutils;
mod users;

/// Default value of the `favorites_user` option.
const DEFAULT_FAVORITES_USER_ID: i32 = 1;

/// Configuration options for the business logic.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverOptions {
    /// The user whose favorites are managed through the API.
    pub(crate) favorites_user: UserId,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self { favorites_user: UserId::from(DEFAULT_FAVORITES_USER_ID) }
    }
}

impl DriverOptions {
    /// Creates a new set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_FAVORITES_USER_ID`.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        Ok(Self {
            favorites_user: UserId::from(
                get_optional_var::<i32>(prefix, "FAVORITES_USER_ID")?
                    .unwrap_or(DEFAULT_FAVORITES_USER_ID),
            ),
        })
    }
}

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they start and commit a
/// transaction, so it's incorrect for the caller to use two separate calls.  For this reason,
/// these operations consume the driver in an attempt to minimize the possibility of executing
/// two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,

    /// Options for the business logic.
    opts: DriverOptions,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>, opts: DriverOptions) -> Self {
        Self { db, opts }
    }

    /// Returns the user whose favorites are managed through the API.
    pub(crate) fn favorites_user(&self) -> UserId {
        self.opts.favorites_user
    }
}

/// Converts a database `NotFound` error into a driver error that describes the missing `what`,
/// passing all other errors through.
fn not_found_as(e: DbError, what: impl FnOnce() -> String) -> DriverError {
    match e {
        DbError::NotFound => {
            let message = what();
            debug!("{}", message);
            DriverError::NotFound(message)
        }
        e => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_options_from_env_all_present() {
        let overrides = [("STARWARS_FAVORITES_USER_ID", Some("42"))];
        temp_env::with_vars(overrides, || {
            let opts = DriverOptions::from_env("STARWARS").unwrap();
            assert_eq!(DriverOptions { favorites_user: UserId::from(42) }, opts);
        });
    }

    #[test]
    fn test_driver_options_from_env_defaults() {
        temp_env::with_var_unset("STARWARS_FAVORITES_USER_ID", || {
            let opts = DriverOptions::from_env("STARWARS").unwrap();
            assert_eq!(DriverOptions::default(), opts);
            assert_eq!(UserId::from(1), opts.favorites_user);
        });
    }

    #[test]
    fn test_driver_options_from_env_bad_type() {
        temp_env::with_var("STARWARS_FAVORITES_USER_ID", Some("abc"), || {
            let err = DriverOptions::from_env("STARWARS").unwrap_err();
            assert!(err.contains("STARWARS_FAVORITES_USER_ID"));
        });
    }

    #[test]
    fn test_not_found_as() {
        assert_eq!(
            DriverError::NotFound("Person 3 not found".to_owned()),
            not_found_as(DbError::NotFound, || "Person 3 not found".to_owned())
        );
        assert_eq!(
            DriverError::AlreadyExists("Already exists".to_owned()),
            not_found_as(DbError::AlreadyExists, || panic!("Must not be called"))
        );
    }
}
