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

//! Reading of seed files with reference data.

use crate::model::SeedData;
use crate::rest::records::{PersonRecord, PlanetRecord, UserRecord};
use serde::Deserialize;
use std::path::Path;

/// Contents of a seed file, using the same field names as the REST API.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    /// Users to create.
    #[serde(default)]
    users: Vec<UserRecord>,

    /// People to create.
    #[serde(default)]
    people: Vec<PersonRecord>,

    /// Planets to create.
    #[serde(default)]
    planets: Vec<PlanetRecord>,
}

impl From<SeedFile> for SeedData {
    fn from(file: SeedFile) -> Self {
        SeedData::new(
            file.users.into_iter().map(Into::into).collect(),
            file.people.into_iter().map(Into::into).collect(),
            file.planets.into_iter().map(Into::into).collect(),
        )
    }
}

/// Parses the JSON `contents` of a seed file.
fn parse_seed(contents: &str) -> Result<SeedData, String> {
    let file: SeedFile = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    Ok(file.into())
}

/// Reads and parses the seed file at `path`.
pub(crate) async fn load_seed_file(path: &Path) -> Result<SeedData, String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read seed file {}: {}", path.display(), e))?;
    parse_seed(&contents).map_err(|e| format!("Invalid seed file {}: {}", path.display(), e))
}
