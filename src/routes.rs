//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`          - HTML landing page
//! - `GET /health`    - Health check: storage status
//! - `/strings/*`     - String analysis REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, home_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Requests with trailing slashes are normalized before routing, so
/// `GET /strings/` and `GET /strings` hit the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::string_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
