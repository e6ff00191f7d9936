//! MEMi content service — HTTP API.
//!
//! Owns the home-page content aggregate and fronts the external backend for
//! per-entity CRUD. Router assembly lives here so the binary and the
//! integration tests serve the exact same application.

use axum::Router;
use axum::middleware::from_fn;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use crate::state::AppState;

/// Builds the full application router.
///
/// All `/api/dashboard/messages`, `/api/upload` and `/api/auth` routes sit
/// behind the credential-presence gate; `GET /api/dashboard/home` stays
/// public, its `PUT` counterpart checks the credential in-handler.
#[must_use]
pub fn app(state: AppState) -> Router {
    let dashboard = Router::new()
        .merge(routes::home::router())
        .nest(
            "/messages",
            routes::messages::router().layer(from_fn(middleware::require_auth)),
        );

    Router::new()
        .merge(routes::health::router())
        .nest("/api/dashboard", dashboard)
        .nest("/api/blog", routes::blog::router())
        .nest("/api/courses", routes::courses::router())
        .nest("/api/categories", routes::categories::router())
        .nest(
            "/api/upload",
            routes::upload::router().layer(from_fn(middleware::require_auth)),
        )
        .nest(
            "/api/auth",
            routes::auth::router().layer(from_fn(middleware::require_auth)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::request_id))
        // TODO: Replace CorsLayer::permissive() with restricted origins for production.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
