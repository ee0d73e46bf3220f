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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::Router;
use tower_http::normalize_path::NormalizePath;

mod favorite_person_delete;
mod favorite_person_post;
mod favorite_planet_delete;
mod favorite_planet_post;
mod favorites_get;
mod people_get;
mod person_get;
mod planet_get;
mod planets_get;
pub(crate) mod records;
mod sitemap_get;
#[cfg(test)]
mod testutils;
mod users_get;

/// Endpoints exposed by the service, for documentation purposes.
pub(crate) const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/people/{id}"),
    ("DELETE", "/favorite/people/{id}"),
    ("POST", "/favorite/planet/{id}"),
    ("DELETE", "/favorite/planet/{id}"),
];

/// Creates the router for the application.
///
/// Paths with a trailing slash are served by the same handlers as the paths without it.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, post};
    let routes = Router::new()
        .route("/", get(sitemap_get::handler))
        .route("/people", get(people_get::handler))
        .route("/people/:id", get(person_get::handler))
        .route("/planets", get(planets_get::handler))
        .route("/planets/:id", get(planet_get::handler))
        .route("/users", get(users_get::handler))
        .route("/users/favorites", get(favorites_get::handler))
        .route(
            "/favorite/people/:id",
            post(favorite_person_post::handler).delete(favorite_person_delete::handler),
        )
        .route(
            "/favorite/planet/:id",
            post(favorite_planet_post::handler).delete(favorite_planet_delete::handler),
        )
        .with_state(driver);
    Router::new().fallback_service(NormalizePath::trim_trailing_slash(routes))
}

#[cfg(test)]
mod tests {
    use crate::rest::ENDPOINTS;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    #[tokio::test]
    async fn test_all_endpoints_are_routed() {
        let context = TestContext::setup().await;

        context.create_favorites_user().await;
        let luke = context.create_person(1, "Luke Skywalker").await;
        let tatooine = context.create_planet(1, "Tatooine").await;
        context.add_favorite_person(*luke.id()).await;
        context.add_favorite_planet(*tatooine.id()).await;

        for (method, path) in ENDPOINTS {
            let method = http::Method::from_bytes(method.as_bytes()).unwrap();
            let exp_status = if method == http::Method::POST {
                http::StatusCode::CREATED
            } else {
                http::StatusCode::OK
            };
            OneShotBuilder::new(context.app(), (method, path.replace("{id}", "1")))
                .send_empty()
                .await
                .expect_status(exp_status)
                .take_response()
                .await;
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), (http::Method::GET, "/starships"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_empty()
            .await;
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), (http::Method::PUT, "/favorite/people/1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::METHOD_NOT_ALLOWED)
            .expect_empty()
            .await;
    }

    #[tokio::test]
    async fn test_trailing_slash_with_id() {
        let context = TestContext::setup().await;

        context.create_favorites_user().await;
        let hoth = context.create_planet(4, "Hoth").await;
        context.add_favorite_planet(*hoth.id()).await;

        OneShotBuilder::new(context.app(), (http::Method::DELETE, "/favorite/planet/4/"))
            .send_empty()
            .await
            .take_body_as_text()
            .await;
        assert!(context.get_favorite_planets().await.is_empty());
    }
}
