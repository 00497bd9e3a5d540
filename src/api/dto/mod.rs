//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON with camelCase field names; request bodies are
//! checked with `validator`.

pub mod analytics;
pub mod health;
pub mod links;
