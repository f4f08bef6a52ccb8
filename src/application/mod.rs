//! Application layer services implementing catalog operations.
//!
//! Services consume the [`crate::domain::repositories::DocumentRepository`]
//! trait and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Generic per-collection CRUD
//! - [`services::product_service::ProductService`] - Products, featured listing, whitelisted update
//! - [`services::stats_service::StatsService`] - Dashboard counts
//! - [`services::auth_service::AuthService`] - Token issuing, verification and admin check

pub mod services;
