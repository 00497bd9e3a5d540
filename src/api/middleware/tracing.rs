//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::{Span, info_span};

type MakeSpan = fn(&Request<Body>) -> Span;
type OnResponse = fn(&Response<Body>, Duration, &Span);
type OnFailure = fn(ServerErrorsFailureClass, Duration, &Span);

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span carrying method and path. Responses are
/// logged with status and latency; server errors are additionally logged at
/// `ERROR` level.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/links}: Response status=200 latency_ms=4
/// INFO request{method=GET path=/links/aZ3kP9qx}: Response status=307 latency_ms=2
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeSpan,
    tower_http::trace::DefaultOnRequest,
    OnResponse,
    tower_http::trace::DefaultOnBodyChunk,
    tower_http::trace::DefaultOnEos,
    OnFailure,
> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpan)
        .on_response(on_response as OnResponse)
        .on_failure(on_failure as OnFailure)
}

fn make_span(request: &Request<Body>) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "Response"
    );
}

fn on_failure(failure: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        failure = %failure,
        latency_ms = latency.as_millis() as u64,
        "Request failed"
    );
}
