//! HTTP middleware stack for the user service.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction), added in `main`
//! 2. `TraceLayer` (one `http_request` span per request)
//! 3. Request ID (records the id on that span and echoes it back)

pub mod request_id;
pub mod trace;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use trace::with_request_tracing;
