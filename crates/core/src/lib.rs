//! User service core - Shared domain types.
//!
//! This crate provides the types shared by the HTTP service and its
//! integration tests:
//! - `user-service` - The HTTP service binary
//! - `integration-tests` - End-to-end tests against a running service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids plus the `User` and `Car` records and payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
