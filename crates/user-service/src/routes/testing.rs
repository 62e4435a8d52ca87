//! Test harness driving the router with an in-memory store.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceExt;

use crate::db::memory::MemoryStore;
use crate::state::AppState;

/// Router plus the store behind it.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// An app whose store fails every operation.
    pub fn failing() -> Self {
        Self::with_store(MemoryStore::failing())
    }

    fn with_store(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        // Never connects; only the readiness probe would touch it.
        let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new());
        let state = AppState::with_stores(pool, store.clone(), store.clone());
        let router = super::routes().with_state(state);
        Self { store, router }
    }

    /// Send a request with an optional JSON body; returns status and parsed JSON body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let raw = body.map(|b| b.to_string()).unwrap_or_default();
        let (status, text) = self.send_raw(method, uri, &raw).await;
        let value = serde_json::from_str(&text).unwrap_or(Value::Null);
        (status, value)
    }

    /// Send a request with a raw JSON-typed body; returns status and body text.
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// The canonical user payload.
pub fn ann_lee() -> Value {
    json!({"name": "Ann", "surname": "Lee", "phone": "555", "email": "a@x.com"})
}
