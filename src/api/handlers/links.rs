//! Handler for link registration.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a long URL under a newly generated short identifier.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "shortUrl": "aZ3kP9qx",
///   "redirectUrl": "https://example.com/a",
///   "message": "Short URL generated successfully"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is invalid.
/// Returns 500 Internal Server Error if no free identifier was found or the
/// store is unavailable.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.register(&payload.url).await?;

    Ok(Json(link.into()))
}
