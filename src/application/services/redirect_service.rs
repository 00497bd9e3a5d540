//! Redirect resolution service: the hot path.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::DEFAULT_STORE_TIMEOUT;
use crate::domain::entities::Visit;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed_id;
use crate::utils::deadline;

/// Resolves identifiers to targets, logging one visit per resolution.
///
/// Each call performs exactly one store operation: an atomic append that also
/// returns the link. The visit is persisted before the target is returned, so a
/// caller that observes success has been counted.
pub struct RedirectService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    store_timeout: Duration,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Records a visit to `id` and returns its redirect target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id; nothing is written.
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors or timeouts.
    /// The caller must not redirect in that case.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        if !is_well_formed_id(id) {
            metrics::counter!("redirects_not_found_total").increment(1);
            return Err(AppError::not_found("Short URL not found"));
        }

        let result = deadline::within(
            self.store_timeout,
            "append_visit",
            self.link_repository.append_visit(id, Visit::now()),
        )
        .await;

        match result {
            Ok(link) => {
                metrics::counter!("redirects_total").increment(1);
                debug!(id = %link.id, clicks = link.total_clicks(), "Redirect resolved");
                Ok(link.target)
            }
            Err(e @ AppError::NotFound(_)) => {
                metrics::counter!("redirects_not_found_total").increment(1);
                debug!(id, "Redirect target not found");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
