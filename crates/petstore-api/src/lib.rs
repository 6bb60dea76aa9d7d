//! # petstore-api — Axum Service for the Petstore Sample
//!
//! CRUD-style HTTP endpoints over an in-memory collection of pet records,
//! annotated for automatic OpenAPI documentation generation.
//!
//! ## API Surface
//!
//! | Route                        | Module            | Notes                      |
//! |------------------------------|-------------------|----------------------------|
//! | `GET  /api/pet/{petId}`      | [`routes::pets`]  | 404 when absent            |
//! | `POST /api/pet`              | [`routes::pets`]  | insert or replace          |
//! | `PUT  /api/pet`              | [`routes::pets`]  | same as POST in this sample|
//! | `GET  /api/pet/findByStatus` | [`routes::pets`]  | comma-separated statuses   |
//! | `GET  /api/pet/findByTags`   | [`routes::pets`]  | comma-separated tags       |
//! | `GET  /openapi.json`         | [`openapi`]       | generated spec             |
//! | `GET  /health/*`             | here              | unauthenticated probes     |
//!
//! Pet payloads are JSON or XML depending on `Accept`-header negotiation
//! (see [`respond`]).
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → AuthMiddleware → Handler
//! ```

pub mod auth;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod respond;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;
use crate::state::AppState;

pub use error::ApiError;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the auth middleware
/// so they remain accessible without credentials.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.auth_token.clone(),
    };

    let api = Router::new()
        .merge(routes::pets::router())
        .merge(openapi::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(auth_config))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
