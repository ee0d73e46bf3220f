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

//! Entry point to the Star Wars service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use iii_iv_core::db::Db;
use iii_iv_core::db::postgres::{PostgresDb, PostgresOptions, is_postgres_url};
use iii_iv_core::db::sqlite;
use iii_iv_core::env::{get_optional_bare_var, get_optional_var};
use iii_iv_starwars::driver::DriverOptions;
use iii_iv_starwars::serve;
use log::info;
use std::error::Error;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::Arc;

/// Port to listen on when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Database to use when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";

/// Connects to the database selected by the `DATABASE_*` environment variables.
async fn connect_db() -> Result<Arc<dyn Db + Send + Sync>, Box<dyn Error>> {
    let url = get_optional_var::<String>("DATABASE", "URL")?;
    match url {
        Some(url) if is_postgres_url(&url) => {
            let opts = PostgresOptions::from_env("DATABASE")?;
            info!("Using PostgreSQL database {:?}", opts);
            Ok(Arc::new(PostgresDb::connect(opts)?))
        }
        url => {
            let url = url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
            info!("Using SQLite database {}", url);
            Ok(Arc::new(sqlite::connect(&url).await?))
        }
    }
}

/// Reads the configuration, connects to the database and serves until interrupted.
async fn run() -> Result<(), Box<dyn Error>> {
    let port = get_optional_bare_var::<u16>("PORT")?.unwrap_or(DEFAULT_PORT);
    let addr = (Ipv4Addr::UNSPECIFIED, port);

    let opts = DriverOptions::from_env("STARWARS")?;
    let seed_file = get_optional_var::<String>("STARWARS", "SEED_FILE")?.map(PathBuf::from);

    let db = connect_db().await?;
    let result = serve(addr, db.clone(), opts, seed_file).await;
    db.close().await;
    result
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
