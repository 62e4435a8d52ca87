//! User repository for database operations.
//!
//! A user fetch reads the `users` row and the cars joined through `user_cars`
//! inside one `REPEATABLE READ` transaction, so both reads see the same
//! snapshot. Writes never touch `user_cars`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use user_service_core::{Car, NewUser, User, UserId, UserUpdate};

use super::cars::CarRow;
use super::{RepositoryError, Resource, UserStore};

/// A row of the `users` table.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            phone: row.phone,
            email: row.email,
            cars: Vec::new(),
            created_at: row.created_at,
        }
    }
}

/// `PostgreSQL`-backed [`UserStore`].
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_with_cars(&self, id: UserId) -> Result<Option<User>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, name, surname, phone, email, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let user = match row {
            Some(row) => {
                let cars = sqlx::query_as::<_, CarRow>(
                    r"
                    SELECT cars.id, cars.name, cars.model, cars.price, cars.created_at
                    FROM cars
                    JOIN user_cars ON user_cars.car_id = cars.id
                    WHERE user_cars.user_id = $1
                    ORDER BY cars.id
                    ",
                )
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

                Some(User::from(row).with_cars(cars.into_iter().map(Car::from).collect()))
            }
            None => None,
        };

        tx.commit().await?;
        Ok(user)
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn get(&self, id: UserId) -> Result<User, RepositoryError> {
        let user = self.fetch_with_cars(id).await.map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to fetch user");
            RepositoryError::Database(e)
        })?;

        user.ok_or_else(|| {
            tracing::info!(user_id = %id, "User not found");
            RepositoryError::NotFound(Resource::User)
        })
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (name, surname, phone, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, surname, phone, email, created_at
            ",
        )
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.phone)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn update(&self, user: &UserUpdate) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET name = $1, surname = $2, phone = $3, email = $4
            WHERE id = $5
            ",
        )
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.phone)
        .bind(&user.email)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user.id, "Failed to update user");
            RepositoryError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            tracing::info!(user_id = %user.id, "User update matched no rows");
        }

        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %id, "Failed to delete user");
                RepositoryError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            tracing::info!(user_id = %id, "User delete matched no rows");
        }

        Ok(())
    }
}
