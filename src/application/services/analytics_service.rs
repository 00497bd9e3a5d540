//! Read-only visit analytics.

use std::sync::Arc;
use std::time::Duration;

use super::DEFAULT_STORE_TIMEOUT;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed_id;
use crate::utils::deadline;

/// Visit totals for one link, with its full chronological history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAnalytics {
    pub total_clicks: usize,
    pub link: Link,
}

impl From<Link> for LinkAnalytics {
    fn from(link: Link) -> Self {
        Self {
            total_clicks: link.total_clicks(),
            link,
        }
    }
}

/// Service for reading link analytics. Never mutates the store.
pub struct AnalyticsService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    store_timeout: Duration,
}

impl<L: LinkRepository + ?Sized> AnalyticsService<L> {
    /// Creates a new analytics service.
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

    /// Returns the click total and visit history for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::StoreUnavailable`] on storage errors or timeouts.
    pub async fn get_analytics(&self, id: &str) -> Result<LinkAnalytics, AppError> {
        if !is_well_formed_id(id) {
            return Err(AppError::not_found("Short URL not found"));
        }

        let link = deadline::within(self.store_timeout, "get", self.link_repository.get(id)).await?;

        Ok(link.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Visit;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_get_analytics_counts_visits() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_get()
            .withf(|id| id == "abc1234")
            .times(1)
            .returning(|id| {
                Ok(Link::new(
                    id.to_string(),
                    "https://example.com/a".to_string(),
                    Utc::now(),
                    vec![
                        Visit::from_millis(1_000).unwrap(),
                        Visit::from_millis(2_000).unwrap(),
                    ],
                ))
            });
        mock_repo.expect_append_visit().times(0);

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let analytics = service.get_analytics("abc1234").await.unwrap();
        assert_eq!(analytics.total_clicks, 2);
        assert_eq!(analytics.link.target, "https://example.com/a");
        assert_eq!(analytics.link.visits[0].timestamp_millis(), 1_000);
    }

    #[tokio::test]
    async fn test_get_analytics_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_get()
            .times(1)
            .returning(|_| Err(AppError::not_found("Short URL not found")));

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let result = service.get_analytics("nonexistent").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_analytics_malformed_id_skips_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_get().times(0);

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let result = service.get_analytics("not-an-id!").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
