//! # Symbol Eye API
//!
//! Catalog backend for the Symbol Eye storefront: categories, products,
//! services, gallery and FAQ, served as JSON over Axum and stored in MongoDB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Collections, documents and the repository trait
//! - **Application Layer** ([`application`]) - Catalog, statistics and auth services
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, auth guards and hardening middleware
//!
//! ## Access Model
//!
//! - Listing endpoints and token issuing are public
//! - Writes and statistics require a bearer token whose `email` claim equals
//!   the configured administrator email
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export JWT_SECRET_KEY="change-me"
//! export ADMIN_EMAIL="owner@example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthClaims, AuthService, CatalogService, ProductService, StatsService,
    };
    pub use crate::domain::entities::{
        Collection, DeleteOutcome, Document, DocumentId, InsertOutcome, UpdateOutcome,
    };
    pub use crate::domain::repositories::{DocumentFilter, DocumentRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
