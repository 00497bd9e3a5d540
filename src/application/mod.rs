//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRepository`] store
//! handle injected at construction and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link registration with collision retry
//! - [`services::redirect_service::RedirectService`] - Redirect resolution and visit logging
//! - [`services::analytics_service::AnalyticsService`] - Read-only visit analytics

pub mod services;
