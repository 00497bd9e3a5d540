//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its target, counting the visit.
///
/// # Endpoint
///
/// `GET /links/{id}`
///
/// # Request Flow
///
/// 1. Append a visit to the link in one atomic store update
/// 2. Return 307 Temporary Redirect to the target
///
/// The visit is persisted before the response is sent. If the store fails or
/// times out no redirect is issued.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
/// Returns 500 Internal Server Error if the store is unavailable.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.redirect_service.resolve(&id).await?;

    let location = HeaderValue::from_str(&target)
        .map_err(|_| AppError::store(format!("stored target for '{}' is not a valid header", id)))?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
