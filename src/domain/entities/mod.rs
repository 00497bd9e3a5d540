//! Core domain entities.
//!
//! - [`Link`] - A shortened URL with its append-only visit history
//! - [`Visit`] - One resolved redirect
//! - [`NewLink`] - Input for creating a link

pub mod link;
pub mod visit;

pub use link::{Link, NewLink};
pub use visit::Visit;
