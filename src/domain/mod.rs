//! Domain layer containing business entities and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures ([`entities::Link`], [`entities::Visit`])
//! - [`repositories`] - The [`repositories::LinkRepository`] store contract
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Store implementations live in [`crate::infrastructure::persistence`] and
//! orchestration lives in [`crate::application::services`].
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives a redirect request
//! 2. [`crate::application::services::RedirectService`] appends a [`entities::Visit`]
//!    through a single atomic store update
//! 3. The updated link's target is returned and the client is redirected

pub mod entities;
pub mod repositories;
