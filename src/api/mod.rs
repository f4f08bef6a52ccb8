//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies with a fixed contract
//! - [`extract`] - Request extractors with JSON rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication guards, hardening and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
