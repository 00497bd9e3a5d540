//! API route configuration.

use crate::api::handlers::{
    analytics_handler, analytics_query_handler, create_link_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link registration, redirect and analytics routes.
///
/// # Endpoints
///
/// - `POST /links`                 - Register a long URL
/// - `GET  /links/{id}`            - Redirect to the target, counting the visit
/// - `GET  /links/{id}/analytics`  - Click total and visit history
/// - `GET  /analytics?id={id}`     - Same as above, query-string form
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{id}", get(redirect_handler))
        .route("/links/{id}/analytics", get(analytics_handler))
        .route("/analytics", get(analytics_query_handler))
}
