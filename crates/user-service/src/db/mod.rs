//! Database operations for the user service `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `users` - User records
//! - `cars` - Car records
//! - `user_cars` - Join table linking users to the cars they own
//!
//! # Schema
//!
//! The schema is managed outside this service and must exist before startup.
//! `schema.sql` at the crate root documents the expected layout.

pub mod cars;
#[cfg(test)]
pub(crate) mod memory;
pub mod users;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use user_service_core::{Car, CarId, CarUpdate, NewCar, NewUser, User, UserId, UserUpdate};

use crate::config::DatabaseConfig;

pub use cars::PgCarRepository;
pub use users::PgUserRepository;

/// The kind of record a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Car,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Car => f.write_str("car"),
        }
    }
}

/// Errors that can occur during repository operations.
///
/// Each variant has already been logged by the repository that produced it.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("{0} not found")]
    NotFound(Resource),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Data access for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user together with the cars joined to it.
    async fn get(&self, id: UserId) -> Result<User, RepositoryError>;

    /// Insert a user, returning the stored record.
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Overwrite every mutable field of an existing user.
    async fn update(&self, user: &UserUpdate) -> Result<(), RepositoryError>;

    /// Remove a user.
    async fn delete(&self, id: UserId) -> Result<(), RepositoryError>;
}

/// Data access for cars.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Fetch a single car.
    async fn get(&self, id: CarId) -> Result<Car, RepositoryError>;

    /// Insert a car, returning the stored record.
    async fn create(&self, car: &NewCar) -> Result<Car, RepositoryError>;

    /// Overwrite every mutable field of an existing car.
    async fn update(&self, car: &CarUpdate) -> Result<(), RepositoryError>;

    /// Remove a car.
    async fn delete(&self, id: CarId) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(config.connect_options())
        .await
}

/// Liveness probe against the database.
///
/// # Errors
///
/// Returns `sqlx::Error` if the database does not answer.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
