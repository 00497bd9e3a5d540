//! Repository trait for short link storage.

use crate::domain::entities::{Link, NewLink, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// The link store: the only owner of durable state.
///
/// `create` and `append_visit` are the only mutators and each is a single
/// atomic operation, so a failed call never leaves a partial write behind.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link with the current timestamp and an empty visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Collision`] if `new_link.id` already exists. Of two
    /// concurrent creates with the same id exactly one succeeds.
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Fetches a link with its full visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn get(&self, id: &str) -> Result<Link, AppError>;

    /// Atomically appends one visit and returns the updated link.
    ///
    /// Safe under any number of concurrent callers on the same id: no visit is
    /// lost, duplicated or interleaved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id; nothing is written.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn append_visit(&self, id: &str, visit: Visit) -> Result<Link, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if it is not.
    async fn ping(&self) -> Result<(), AppError>;

    /// Releases the store's resources. Later calls fail with
    /// [`AppError::StoreUnavailable`].
    async fn close(&self);
}
