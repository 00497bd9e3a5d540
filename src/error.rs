//! Application error taxonomy and HTTP error rendering.
//!
//! Every failure surfaces to HTTP clients as `{ "success": false, "message": ... }`
//! with a status code derived from the error kind.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad client input. Rendered as 400.
    #[error("{0}")]
    Validation(String),

    /// Unknown short identifier. Rendered as 404.
    #[error("{0}")]
    NotFound(String),

    /// The candidate identifier is already taken.
    ///
    /// Recovered by the registrar and never expected to reach a client.
    #[error("Identifier '{id}' is already in use")]
    Collision { id: String },

    /// Every identifier candidate collided. Rendered as 500.
    #[error("Failed to generate a unique short URL after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// Store I/O failure or timeout. Rendered as 500; safe to retry.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Returns true for the recoverable identifier collision.
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }

    /// Returns true when the caller may retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable(_) | Self::GenerationExhausted { .. }
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Collision { .. }
            | Self::GenerationExhausted { .. }
            | Self::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details of store failures stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::NotFound(message) => message.clone(),
            Self::Collision { .. } | Self::GenerationExhausted { .. } => {
                "Failed to generate short URL".to_string()
            }
            Self::StoreUnavailable(_) => "Storage temporarily unavailable".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            success: false,
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for '{}'", field),
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::Validation(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", e.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::Validation(format!("Invalid query string: {}", e.body_text()))
    }
}
