//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{CarStore, PgCarRepository, PgUserRepository, UserStore};

/// Application state shared across all handlers.
///
/// Built once at startup and never mutated afterwards. Cheaply cloneable via
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    users: Arc<dyn UserStore>,
    cars: Arc<dyn CarStore>,
}

impl AppState {
    /// Create application state backed by `PostgreSQL` repositories.
    ///
    /// Both repositories share the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        let cars = Arc::new(PgCarRepository::new(pool.clone()));
        Self::with_stores(pool, users, cars)
    }

    /// Create application state with explicit stores.
    #[must_use]
    pub fn with_stores(pool: PgPool, users: Arc<dyn UserStore>, cars: Arc<dyn CarStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, users, cars }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the user store.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }

    /// Get the car store.
    #[must_use]
    pub fn cars(&self) -> &dyn CarStore {
        self.inner.cars.as_ref()
    }
}
