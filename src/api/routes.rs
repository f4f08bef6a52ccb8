//! API route configuration.
//!
//! Routes are split by the capabilities they require. Public reads and token
//! issuing carry no guard; every write and the statistics endpoint carry the
//! [`auth::require_token`] and [`auth::require_admin`] guards, applied per
//! route so the same path can serve a public `GET` and an admin `DELETE`.

use crate::api::handlers::{
    create_category_handler, create_faq_item_handler, create_gallery_item_handler,
    create_product_handler, create_service_handler, delete_category_handler,
    delete_faq_item_handler, delete_gallery_item_handler, delete_product_handler,
    delete_service_handler, featured_products_handler, get_product_handler, issue_token_handler,
    list_categories_handler, list_faq_handler, list_gallery_handler, list_products_handler,
    list_services_handler, method_not_allowed_handler, statistics_handler, update_product_handler,
    update_service_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /jwt`                - Issue a signed token from posted claims
/// - `GET  /category`           - List categories
/// - `GET  /products`           - List products
/// - `GET  /products/{id}`      - Fetch one product
/// - `GET  /featured/products`  - List featured products
/// - `GET  /services`           - List services
/// - `GET  /gallery`            - List gallery items
/// - `GET  /faq`                - List FAQ entries
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_token_handler))
        .route("/category", get(list_categories_handler))
        .route("/products", get(list_products_handler))
        .route("/products/{id}", get(get_product_handler))
        .route("/featured/products", get(featured_products_handler))
        .route("/services", get(list_services_handler))
        .route("/gallery", get(list_gallery_handler))
        .route("/faq", get(list_faq_handler))
}

/// Routes restricted to the administrator.
///
/// # Endpoints
///
/// - `POST   /category`        - Create a category
/// - `DELETE /category/{id}`   - Delete a category
/// - `POST   /products`        - Create a product
/// - `PATCH  /products/{id}`   - Update whitelisted product fields
/// - `DELETE /products/{id}`   - Delete a product
/// - `POST   /services`        - Create a service
/// - `PATCH  /services/{id}`   - Update a service
/// - `DELETE /services/{id}`   - Delete a service
/// - `POST   /gallery`         - Create a gallery item
/// - `DELETE /gallery/{id}`    - Delete a gallery item
/// - `POST   /faq`             - Create a FAQ entry
/// - `DELETE /faq/{id}`        - Delete a FAQ entry
/// - `GET    /statistic`       - Dashboard counts
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/category", post(create_category_handler))
        .route("/category/{id}", delete(delete_category_handler))
        .route("/products", post(create_product_handler))
        .route(
            "/products/{id}",
            patch(update_product_handler).delete(delete_product_handler),
        )
        .route("/services", post(create_service_handler))
        .route(
            "/services/{id}",
            patch(update_service_handler).delete(delete_service_handler),
        )
        .route("/gallery", post(create_gallery_item_handler))
        .route("/gallery/{id}", delete(delete_gallery_item_handler))
        .route("/faq", post(create_faq_item_handler))
        .route("/faq/{id}", delete(delete_faq_item_handler))
        .route("/statistic", get(statistics_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ))
        .route_layer(middleware::from_fn_with_state(state, auth::require_token))
}

/// All API routes, to be nested under `/api`.
///
/// A known path hit with an unsupported method answers `405` without running
/// the auth guards.
pub fn api_routes(state: AppState) -> Router<AppState> {
    public_routes()
        .merge(admin_routes(state))
        .method_not_allowed_fallback(method_not_allowed_handler)
}
