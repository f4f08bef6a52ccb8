//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Liveness text (public)
//! - `GET  /health`  - Database health check (public)
//! - `/api/*`        - Catalog REST API (see [`crate::api::routes`])
//! - anything else   - `404 { "message": "route not found" }`
//! - known path, wrong method - `405 { "message": "method not allowed" }`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, for the browser storefront
//! - **Panic recovery** - Handler panics become JSON 500 responses
//! - **Timeout** - Per-request processing limit
//! - **Authentication** - Bearer token + admin guards on admin routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{
    fallback_handler, health_handler, method_not_allowed_handler, root_handler,
};
use crate::api::middleware::{hardening, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - maximum time a request may spend in the handler chain
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes(state.clone()))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(fallback_handler)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            request_timeout,
            hardening::timeout,
        ))
        .layer(hardening::catch_panic_layer())
        .layer(hardening::cors_layer())
        .layer(tracing::layer())
}

/// [`router`] wrapped in trailing-slash normalization, ready to serve.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
