//! Core types for the user service.
//!
//! This module provides type-safe identifiers and the user/car records.

pub mod car;
pub mod id;
pub mod user;

pub use car::{Car, CarUpdate, NewCar};
pub use id::{CarId, UserId};
pub use user::{NewUser, User, UserUpdate};
