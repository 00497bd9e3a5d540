//! DTOs for link registration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// A missing `url` field is treated as empty so it fails validation with a
/// 400 rather than a deserialization error. Length and format limits are
/// enforced by the registrar.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub success: bool,
    pub short_url: String,
    pub redirect_url: String,
    pub message: String,
}

impl From<Link> for CreateLinkResponse {
    fn from(link: Link) -> Self {
        Self {
            success: true,
            short_url: link.id,
            redirect_url: link.target,
            message: "Short URL generated successfully".to_string(),
        }
    }
}
