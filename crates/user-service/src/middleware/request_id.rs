//! Correlation ids for user-service requests.
//!
//! Each request gets an id that appears on its `http_request` span, as a
//! `request_id` tag on any Sentry event raised while handling it, and in the
//! `x-request-id` response header. A caller or proxy may supply the id; the
//! service mints a UUID v4 when the supplied one is missing or unusable.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest inbound id accepted verbatim.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Pick the id for a request: the inbound header if it is 1 to 128 visible
/// ASCII characters, a fresh UUID v4 otherwise.
fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Attach a correlation id to the request span, the Sentry scope and the
/// response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;

    // Always valid: either a checked inbound value or a UUID.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
