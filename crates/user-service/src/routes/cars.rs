//! Car route handlers.

use axum::{Json, extract::State, http::StatusCode};

use user_service_core::{Car, CarId, CarUpdate, NewCar};

use crate::error::Result;
use crate::extract::{ApiJson, IdPath};
use crate::state::AppState;

/// Fetch a car.
///
/// # Errors
///
/// Returns 400 for a non-integer id, 404 if the car does not exist and 500
/// on database failure.
pub async fn get(State(state): State<AppState>, IdPath(id): IdPath<CarId>) -> Result<Json<Car>> {
    let car = state.cars().get(id).await?;
    Ok(Json(car))
}

/// Create a car and return the stored record.
///
/// # Errors
///
/// Returns 400 for a malformed body and 500 on database failure.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(new_car): ApiJson<NewCar>,
) -> Result<(StatusCode, Json<Car>)> {
    let car = state.cars().create(&new_car).await?;
    tracing::debug!(car_id = %car.id, "Car created");
    Ok((StatusCode::CREATED, Json(car)))
}

/// Overwrite a car's fields.
///
/// # Errors
///
/// Returns 400 for a malformed body and 500 on database failure.
pub async fn update(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<CarUpdate>,
) -> Result<StatusCode> {
    state.cars().update(&update).await?;
    Ok(StatusCode::OK)
}

/// Delete a car.
///
/// # Errors
///
/// Returns 400 for a non-integer id and 500 on database failure.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath<CarId>) -> Result<StatusCode> {
    state.cars().delete(id).await?;
    Ok(StatusCode::OK)
}
