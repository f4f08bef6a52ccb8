//! Data Transfer Objects for API responses.
//!
//! Catalog documents are passed through as untyped JSON; only the endpoints
//! with a fixed response contract have DTOs here.

pub mod health;
pub mod stats;
pub mod token;
