mod common;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use serde_json::Value;
use shortlink::config::Config;
use shortlink::domain::entities::NewLink;
use shortlink::domain::repositories::LinkRepository;
use shortlink::state::AppState;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_redirect_counts_visit() {
    let (server, repository) = common::create_test_server();
    let id = common::register(&server, "https://example.com/a").await;

    let response = server.get(&format!("/links/{}", id)).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header(header::LOCATION), "https://example.com/a");

    let stored = repository.get(&id).await.unwrap();
    assert_eq!(stored.total_clicks(), 1);

    let analytics = server.get(&format!("/links/{}/analytics", id)).await;
    analytics.assert_status_ok();

    let json = analytics.json::<Value>();
    assert_eq!(json["totalClicks"], 1);
    assert_eq!(json["entry"]["visitHistory"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_redirect_visit_timestamp_not_before_creation() {
    let (server, repository) = common::create_test_server();
    let id = common::register(&server, "https://example.com/b").await;

    server
        .get(&format!("/links/{}", id))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let stored = repository.get(&id).await.unwrap();
    assert!(stored.visits[0].timestamp >= stored.created_at);
}

#[tokio::test]
async fn test_redirect_repeated_visits_accumulate() {
    let (server, repository) = common::create_test_server();
    let id = common::register(&server, "https://example.com/c").await;

    for _ in 0..3 {
        server
            .get(&format!("/links/{}", id))
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let stored = repository.get(&id).await.unwrap();
    assert_eq!(stored.total_clicks(), 3);
    assert!(
        stored
            .visits
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, repository) = common::create_test_server();

    let response = server.get("/links/doesNotExist").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Short URL not found");
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_redirect_malformed_id() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/links/not%20an%20id").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_redirect_store_closed() {
    let (server, repository) = common::create_test_server();
    let id = common::register(&server, "https://example.com/d").await;
    repository.close().await;

    let response = server.get(&format!("/links/{}", id)).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.maybe_header(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_redirect_store_timeout() {
    let repository = Arc::new(common::SlowLinkRepository::new(Duration::from_secs(10)));
    repository
        .inner
        .create(NewLink {
            id: "slow1234".to_string(),
            target: "https://example.com/slow".to_string(),
        })
        .await
        .unwrap();

    let config = Config {
        store_timeout_ms: 50,
        ..Config::default()
    };
    let state = AppState::from_config(repository.clone(), &config);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/links/slow1234").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.maybe_header(header::LOCATION).is_none());
    assert_eq!(
        response.json::<Value>()["message"],
        "Storage temporarily unavailable"
    );
    assert_eq!(
        repository.inner.get("slow1234").await.unwrap().total_clicks(),
        0
    );
}
