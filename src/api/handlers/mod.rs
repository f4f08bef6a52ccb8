//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one entity or concern. Handlers only
//! translate HTTP into a single service call; identifiers are parsed from
//! the path before any database access.

pub mod categories;
pub mod faq;
pub mod gallery;
pub mod health;
pub mod products;
pub mod services;
pub mod stats;
pub mod token;

pub use categories::{create_category_handler, delete_category_handler, list_categories_handler};
pub use faq::{create_faq_item_handler, delete_faq_item_handler, list_faq_handler};
pub use gallery::{create_gallery_item_handler, delete_gallery_item_handler, list_gallery_handler};
pub use health::{fallback_handler, health_handler, method_not_allowed_handler, root_handler};
pub use products::{
    create_product_handler, delete_product_handler, featured_products_handler,
    get_product_handler, list_products_handler, update_product_handler,
};
pub use services::{
    create_service_handler, delete_service_handler, list_services_handler, update_service_handler,
};
pub use stats::statistics_handler;
pub use token::issue_token_handler;
