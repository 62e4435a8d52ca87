//! Per-request tracing span and request-id wiring.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
    middleware::from_fn,
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use super::request_id_middleware;

/// Wrap `router` in the request-id middleware and an `http_request` span.
///
/// The span carries method, uri, request id, status and latency. The
/// `TraceLayer` failure hook is off: server errors are logged at error level
/// by the repository that produced them.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn(request_id_middleware)).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                    status = tracing::field::Empty,
                    latency_ms = tracing::field::Empty,
                )
            })
            .on_response(|response: &Response<Body>, latency: Duration, span: &Span| {
                span.record("status", response.status().as_u16());
                span.record(
                    "latency_ms",
                    u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                );
                DefaultOnResponse::default().on_response(response, latency, span);
            })
            .on_failure(()),
    )
}
