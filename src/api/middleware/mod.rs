//! HTTP middleware for request processing and protection.
//!
//! Provides authentication guards, request hardening, and observability.

pub mod auth;
pub mod hardening;
pub mod tracing;
