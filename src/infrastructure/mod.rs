//! Infrastructure layer for external integrations.
//!
//! This layer implements the store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory link stores

pub mod persistence;
