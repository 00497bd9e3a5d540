//! Business logic services for the application layer.

pub mod analytics_service;
pub mod link_service;
pub mod redirect_service;

pub use analytics_service::{AnalyticsService, LinkAnalytics};
pub use link_service::LinkService;
pub use redirect_service::RedirectService;

use std::time::Duration;

/// Default upper bound on a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);
