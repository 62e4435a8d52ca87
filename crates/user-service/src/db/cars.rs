//! Car repository for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use user_service_core::{Car, CarId, CarUpdate, NewCar};

use super::{CarStore, RepositoryError, Resource};

/// A row of the `cars` table.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CarRow {
    pub id: CarId,
    pub name: String,
    pub model: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            model: row.model,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

/// `PostgreSQL`-backed [`CarStore`].
#[derive(Debug, Clone)]
pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    /// Create a new car repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for PgCarRepository {
    async fn get(&self, id: CarId) -> Result<Car, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r"
            SELECT id, name, model, price, created_at
            FROM cars
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, car_id = %id, "Failed to fetch car");
            RepositoryError::Database(e)
        })?;

        row.map(Car::from).ok_or_else(|| {
            tracing::info!(car_id = %id, "Car not found");
            RepositoryError::NotFound(Resource::Car)
        })
    }

    async fn create(&self, car: &NewCar) -> Result<Car, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r"
            INSERT INTO cars (name, model, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, model, price, created_at
            ",
        )
        .bind(&car.name)
        .bind(&car.model)
        .bind(car.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create car");
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn update(&self, car: &CarUpdate) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cars
            SET name = $1, model = $2, price = $3
            WHERE id = $4
            ",
        )
        .bind(&car.name)
        .bind(&car.model)
        .bind(car.price)
        .bind(car.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, car_id = %car.id, "Failed to update car");
            RepositoryError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            tracing::info!(car_id = %car.id, "Car update matched no rows");
        }

        Ok(())
    }

    async fn delete(&self, id: CarId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, car_id = %id, "Failed to delete car");
                RepositoryError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            tracing::info!(car_id = %id, "Car delete matched no rows");
        }

        Ok(())
    }
}
