//! Business logic services for the application layer.

pub mod auth_service;
pub mod catalog_service;
pub mod product_service;
pub mod stats_service;

pub use auth_service::{AuthClaims, AuthService};
pub use catalog_service::CatalogService;
pub use product_service::ProductService;
pub use stats_service::{CatalogStats, StatsService};
