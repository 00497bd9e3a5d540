//! HTTP request handlers for API endpoints.

pub mod analytics;
pub mod health;
pub mod links;
pub mod redirect;

pub use analytics::{analytics_handler, analytics_query_handler};
pub use health::health_handler;
pub use links::create_link_handler;
pub use redirect::redirect_handler;
