//! Link registration service.

use std::sync::Arc;
use std::time::Duration;

use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, error, info};

use super::DEFAULT_STORE_TIMEOUT;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::IdGenerator;
use crate::utils::deadline;
use crate::utils::url_validator::validate_target;

/// Default number of identifiers tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service for registering new short links.
///
/// Validates the target, then generates identifiers until the store accepts
/// one. Uniqueness is enforced by the store's `create`, never by checking
/// for existence first, so concurrent registrations cannot race onto the
/// same identifier.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    generator: IdGenerator,
    max_attempts: usize,
    store_timeout: Duration,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service with default generator and retry settings.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            generator: IdGenerator::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_generator(mut self, generator: IdGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the number of identifiers tried per registration (at least one).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Registers `target` under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target is not an absolute HTTP(S) URL.
    ///
    /// Returns [`AppError::GenerationExhausted`] if every attempted identifier
    /// was already taken.
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors or timeouts.
    pub async fn register(&self, target: &str) -> Result<Link, AppError> {
        let target = validate_target(target).map_err(|e| AppError::validation(e.to_string()))?;

        let repository: &L = self.link_repository.as_ref();
        let generator = self.generator;
        let store_timeout = self.store_timeout;
        let target_ref = &target;

        let attempt = move || {
            let new_link = NewLink {
                id: generator.generate(),
                target: target_ref.clone(),
            };
            deadline::within(store_timeout, "create", repository.create(new_link))
        };

        let on_error = |e: &AppError| {
            if let AppError::Collision { id } = e {
                debug!(id = %id, "Identifier collision, retrying with a new one");
                metrics::counter!("identifier_collisions_total").increment(1);
                true
            } else {
                false
            }
        };

        let strategy = FixedInterval::from_millis(0).take(self.max_attempts - 1);

        match RetryIf::start(strategy, attempt, on_error).await {
            Ok(link) => {
                metrics::counter!("links_created_total").increment(1);
                info!(id = %link.id, target = %link.target, "Short link created");
                Ok(link)
            }
            Err(e) if e.is_collision() => {
                error!(
                    attempts = self.max_attempts,
                    "Identifier generation exhausted"
                );
                Err(AppError::GenerationExhausted {
                    attempts: self.max_attempts,
                })
            }
            Err(e) => Err(e),
        }
    }
}
