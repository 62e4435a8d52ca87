//! User domain types.
//!
//! `User` is the stored record as returned to clients. `NewUser` and
//! `UserUpdate` are the shapes accepted on create and update; neither carries
//! cars, so the user-car relation can never be written through them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::car::Car;
use super::id::UserId;

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// Store-assigned identifier.
    #[serde(rename = "ID", alias = "id")]
    pub id: UserId,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "surname")]
    pub surname: String,
    #[serde(alias = "phone")]
    pub phone: String,
    #[serde(alias = "email")]
    pub email: String,
    /// Cars joined to this user through `user_cars`.
    ///
    /// Only populated on single-user fetch; never persisted with the user row.
    #[serde(alias = "cars", default)]
    pub cars: Vec<Car>,
    /// Set by the store on insert.
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewUser {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "surname")]
    pub surname: String,
    #[serde(alias = "phone")]
    pub phone: String,
    #[serde(alias = "email")]
    pub email: String,
}

/// Payload for a full-field update of an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserUpdate {
    #[serde(rename = "ID", alias = "id")]
    pub id: UserId,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "surname")]
    pub surname: String,
    #[serde(alias = "phone")]
    pub phone: String,
    #[serde(alias = "email")]
    pub email: String,
}

impl User {
    /// Attach the joined cars to this user.
    #[must_use]
    pub fn with_cars(mut self, cars: Vec<Car>) -> Self {
        self.cars = cars;
        self
    }
}
