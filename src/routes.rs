//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/links/*`     - Registration, redirect and analytics (see [`crate::api::routes`])
//! - `/analytics`   - Query-string analytics lookup
//! - `GET /health`  - Store health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
