//! Request extractors whose rejections become `AppError::BadRequest`.
//!
//! Axum's own `Path` and `Json` answer malformed input with a mix of 400,
//! 415 and 422. Every malformed request here is a 400 and never reaches a
//! repository.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// A single typed path parameter, such as `/user/{id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);
