//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    AnalyticsService, DEFAULT_STORE_TIMEOUT, LinkService, RedirectService,
};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;

/// Store handle shared by all services.
pub type SharedLinkRepository = Arc<dyn LinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub redirect_service: Arc<RedirectService<dyn LinkRepository>>,
    pub analytics_service: Arc<AnalyticsService<dyn LinkRepository>>,
    pub link_repository: SharedLinkRepository,
    /// Upper bound on store calls made directly by handlers (health checks).
    pub store_timeout: Duration,
}

impl AppState {
    /// Wires all services onto one store handle with default settings.
    pub fn new(link_repository: SharedLinkRepository) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(link_repository.clone())),
            analytics_service: Arc::new(AnalyticsService::new(link_repository.clone())),
            link_repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Wires all services onto one store handle with settings from `config`.
    pub fn from_config(link_repository: SharedLinkRepository, config: &Config) -> Self {
        let store_timeout = config.store_timeout();

        Self {
            link_service: Arc::new(
                LinkService::new(link_repository.clone())
                    .with_generator(config.id_generator())
                    .with_max_attempts(config.id_max_attempts)
                    .with_store_timeout(store_timeout),
            ),
            redirect_service: Arc::new(
                RedirectService::new(link_repository.clone()).with_store_timeout(store_timeout),
            ),
            analytics_service: Arc::new(
                AnalyticsService::new(link_repository.clone()).with_store_timeout(store_timeout),
            ),
            link_repository,
            store_timeout,
        }
    }
}
