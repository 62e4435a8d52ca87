//! User route handlers.

use axum::{Json, extract::State, http::StatusCode};

use user_service_core::{NewUser, User, UserId, UserUpdate};

use crate::error::Result;
use crate::extract::{ApiJson, IdPath};
use crate::state::AppState;

/// Fetch a user with the cars joined to it.
///
/// # Errors
///
/// Returns 400 for a non-integer id, 404 if the user does not exist and 500
/// on database failure.
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> Result<Json<User>> {
    let user = state.users().get(id).await?;
    Ok(Json(user))
}

/// Create a user and return the stored record.
///
/// # Errors
///
/// Returns 400 for a malformed body and 500 on database failure.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(new_user): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.users().create(&new_user).await?;
    tracing::debug!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Overwrite a user's fields. The user's cars are left alone.
///
/// # Errors
///
/// Returns 400 for a malformed body and 500 on database failure.
pub async fn update(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<UserUpdate>,
) -> Result<StatusCode> {
    state.users().update(&update).await?;
    Ok(StatusCode::OK)
}

/// Delete a user.
///
/// # Errors
///
/// Returns 400 for a non-integer id and 500 on database failure.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> Result<StatusCode> {
    state.users().delete(id).await?;
    Ok(StatusCode::OK)
}
