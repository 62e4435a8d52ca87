//! User service library.
//!
//! CRUD over users and cars stored in `PostgreSQL`, exposed as a small JSON
//! API. The binary in `main.rs` wires these modules together; keeping them in
//! a library lets the router be exercised in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
