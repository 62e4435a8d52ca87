//! HTTP route handlers for the user service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                     - Liveness check
//! GET    /health/ready               - Readiness check (database ping)
//!
//! # Users
//! GET    /v1/user-service/user/{id}  - User with joined cars
//! POST   /v1/user-service/user       - Create user
//! PUT    /v1/user-service/user       - Update user (id in body)
//! DELETE /v1/user-service/user/{id}  - Delete user
//!
//! # Cars
//! GET    /v1/user-service/car/{id}   - Car
//! POST   /v1/user-service/car        - Create car
//! PUT    /v1/user-service/car        - Update car (id in body)
//! DELETE /v1/user-service/car/{id}   - Delete car
//! ```

pub mod cars;
pub mod health;
#[cfg(test)]
pub(crate) mod testing;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(users::create).put(users::update))
        .route("/user/{id}", get(users::get).delete(users::delete))
}

/// Create the car routes router.
pub fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/car", post(cars::create).put(cars::update))
        .route("/car/{id}", get(cars::get).delete(cars::delete))
}

/// Create all routes for the user service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest(
            "/v1/user-service",
            Router::new().merge(user_routes()).merge(car_routes()),
        )
}
