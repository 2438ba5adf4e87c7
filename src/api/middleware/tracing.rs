//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying the method, the route template
/// it matched (so `/api/posts/17` and `/api/posts/18` aggregate under
/// `/api/posts/{id}`) and the concrete URI. Responses are logged at `INFO`
/// with status and latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=PUT route=/api/posts/{id} uri=/api/posts/17}: finished processing request latency=9 ms status=200
/// INFO request{method=POST route=/api/auth/signin uri=/api/auth/signin}: finished processing request latency=41 ms status=401
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched");

    tracing::info_span!(
        "request",
        method = %request.method(),
        route,
        uri = %request.uri(),
    )
}
