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

//! REST service that exposes reference data about Star Wars people and planets, the registered
//! users, and the favorite lists of a configured user.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use iii_iv_core::db::Db;
use log::{info, warn};
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

pub(crate) mod db;
pub mod driver;
use driver::{Driver, DriverOptions};
pub(crate) mod model;
mod rest;
use rest::app;
mod seed;

/// Waits until the process receives a request to terminate.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C; shutting down"),
        Err(e) => {
            warn!("Cannot listen for Ctrl+C; serving until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Instantiates all resources to serve the application on `bind_addr`.
///
/// The database schema is created if missing and, if `seed_file` is present, its contents are
/// loaded before accepting any requests.  Returns once the server has drained all connections
/// after a Ctrl+C.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    db: Arc<dyn Db + Send + Sync>,
    opts: DriverOptions,
    seed_file: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    db::init_schema(&mut db.ex().await?).await?;

    let driver = Driver::new(db, opts);
    if let Some(path) = seed_file {
        let data = seed::load_seed_file(&path).await?;
        driver.clone().seed(data).await?;
    }
    let app = app(driver);

    let listener = TcpListener::bind(bind_addr.into()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
