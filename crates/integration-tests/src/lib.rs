//! Integration tests for the user service.
//!
//! # Running Tests
//!
//! ```bash
//! # Create the schema and start the service
//! psql "$DATABASE_URL" -f crates/user-service/schema.sql
//! cargo run -p user-service
//!
//! # Run the ignored end-to-end tests
//! cargo test -p user-service-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `USER_SERVICE_BASE_URL` - Service URL (default: `http://localhost:8080`)
//! - `DATABASE_URL` - Same database the service uses; needed to seed
//!   `user_cars`, which the API never writes

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;

use user_service_core::{Car, CarId, User, UserId};

/// Base URL for the service (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("USER_SERVICE_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Shared handles for one test.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Build a context pointing at the running service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/v1/user-service", base_url()),
        }
    }

    /// Connect to the service database for seeding.
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is unset or the database is unreachable.
    pub async fn pool(&self) -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        PgPool::connect(&url)
            .await
            .expect("Failed to connect to database")
    }

    /// URL of an entity collection (`user` or `car`), optionally with an id.
    #[must_use]
    pub fn url(&self, entity: &str, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}/{entity}/{id}", self.base_url),
            None => format!("{}/{entity}", self.base_url),
        }
    }

    /// POST a JSON payload, returning status and parsed body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn post(&self, entity: &str, body: &Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(entity, None))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST");
        let status = resp.status();
        (status, resp.json().await.unwrap_or(Value::Null))
    }

    /// PUT a JSON payload, returning status.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn put(&self, entity: &str, body: &Value) -> StatusCode {
        self.client
            .put(self.url(entity, None))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT")
            .status()
    }

    /// GET one entity, returning status and the decoded body when successful.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent or a 200 body does not decode.
    pub async fn get<T: DeserializeOwned>(&self, entity: &str, id: i64) -> (StatusCode, Option<T>) {
        let resp = self
            .client
            .get(self.url(entity, Some(id)))
            .send()
            .await
            .expect("Failed to send GET");
        let status = resp.status();
        if status == StatusCode::OK {
            (status, Some(resp.json().await.expect("Failed to decode body")))
        } else {
            (status, None)
        }
    }

    /// DELETE one entity, returning status.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn delete(&self, entity: &str, id: i64) -> StatusCode {
        self.client
            .delete(self.url(entity, Some(id)))
            .send()
            .await
            .expect("Failed to send DELETE")
            .status()
    }

    /// GET a user.
    pub async fn get_user(&self, id: UserId) -> (StatusCode, Option<User>) {
        self.get("user", id.as_i64()).await
    }

    /// GET a car.
    pub async fn get_car(&self, id: CarId) -> (StatusCode, Option<Car>) {
        self.get("car", id.as_i64()).await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
