//! Handlers for link analytics.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::analytics::{AnalyticsQuery, AnalyticsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click total and visit history of a link.
///
/// # Endpoint
///
/// `GET /links/{id}/analytics`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "totalClicks": 1,
///   "entry": {
///     "shortUrl": "abc1234",
///     "redirectUrl": "https://example.com/a",
///     "createdAt": 1700000000000,
///     "visitHistory": [{ "timestamp": 1700000005000 }]
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.get_analytics(&id).await?;
    Ok(Json(analytics.into()))
}

/// Query-string form of [`analytics_handler`].
///
/// # Endpoint
///
/// `GET /analytics?id={id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is missing or empty.
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn analytics_query_handler(
    State(state): State<AppState>,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let Query(query) = query?;

    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation("Short URL ID is required"))?;

    let analytics = state.analytics_service.get_analytics(&id).await?;
    Ok(Json(analytics.into()))
}
