//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check: DB, cache (public)
//! - `/api/*`      - Catalog reads and account flows
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket; stricter on the auth endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let catalog = api::routes::catalog_routes().layer(rate_limit::layer());
    let auth = api::routes::auth_routes().layer(rate_limit::secure_layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", catalog.merge(auth))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
