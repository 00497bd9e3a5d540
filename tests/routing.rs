mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use shortlink::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let (state, _repository) = common::create_test_state();
    let link = state
        .link_service
        .register("https://example.com/slash")
        .await
        .unwrap();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri(format!("/links/{}/", link.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/slash"
    );
}

#[tokio::test]
async fn test_health_through_full_router() {
    let (state, _repository) = common::create_test_state();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/health/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route() {
    let (state, _repository) = common::create_test_state();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
