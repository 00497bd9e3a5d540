#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use shortlink::api::handlers::health_handler;
use shortlink::api::routes::link_routes;
use shortlink::domain::entities::{Link, NewLink, Visit};
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::InMemoryLinkRepository;
use shortlink::state::AppState;

/// Store whose every call hangs for `delay` before delegating to an
/// in-memory store.
pub struct SlowLinkRepository {
    pub inner: InMemoryLinkRepository,
    pub delay: Duration,
}

impl SlowLinkRepository {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryLinkRepository::new(),
            delay,
        }
    }
}

#[async_trait]
impl LinkRepository for SlowLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(new_link).await
    }

    async fn get(&self, id: &str) -> Result<Link, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(id).await
    }

    async fn append_visit(&self, id: &str, visit: Visit) -> Result<Link, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.append_visit(id, visit).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.ping().await
    }

    async fn close(&self) {
        self.inner.close().await;
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repository.clone());

    (state, repository)
}

pub fn test_router(state: AppState) -> Router {
    Router::new()
        .merge(link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(test_router(state)).unwrap();

    (server, repository)
}

/// Registers `url` through the API and returns the new identifier.
pub async fn register(server: &TestServer, url: &str) -> String {
    let response = server.post("/links").json(&json!({ "url": url })).await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    json["shortUrl"].as_str().unwrap().to_string()
}
