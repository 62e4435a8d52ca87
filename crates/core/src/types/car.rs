//! Car domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::CarId;

/// A car record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Car {
    /// Store-assigned identifier.
    #[serde(rename = "ID", alias = "id")]
    pub id: CarId,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "model")]
    pub model: String,
    /// Price in the smallest currency unit.
    #[serde(alias = "price")]
    pub price: i64,
    /// Set by the store on insert.
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewCar {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "model")]
    pub model: String,
    #[serde(alias = "price")]
    pub price: i64,
}

/// Payload for a full-field update of an existing car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarUpdate {
    #[serde(rename = "ID", alias = "id")]
    pub id: CarId,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "model")]
    pub model: String,
    #[serde(alias = "price")]
    pub price: i64,
}
