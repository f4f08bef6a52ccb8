//! Handlers for product endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ApiJson;
use crate::domain::entities::{DeleteOutcome, Document, DocumentId, InsertOutcome, UpdateOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// Stores the posted document as a new product.
///
/// # Endpoint
///
/// `POST /api/products` (admin)
///
/// No field validation is performed; any JSON object is accepted.
pub async fn create_product_handler(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Document>,
) -> Result<Json<InsertOutcome>, AppError> {
    Ok(Json(state.products.create(body).await?))
}

/// Lists every product.
///
/// # Endpoint
///
/// `GET /api/products` (public)
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    Ok(Json(state.products.list().await?))
}

/// Fetches one product by the id in the path.
///
/// # Endpoint
///
/// `GET /api/products/{id}` (public)
///
/// # Errors
///
/// Returns 400 if `id` is not a valid identifier.
/// Returns 404 if no product has this id.
pub async fn get_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Document>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.products.get(id).await?))
}

/// Lists products whose `isFeatured` is exactly `"Featured"`.
///
/// # Endpoint
///
/// `GET /api/featured/products` (public)
pub async fn featured_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    Ok(Json(state.products.list_featured().await?))
}

/// Partially updates a product.
///
/// # Endpoint
///
/// `PATCH /api/products/{id}` (admin)
///
/// Only `name`, `price`, `category`, `isFeatured`, `description` and `image`
/// are updatable. Whitelisted fields missing from the body are left as they
/// are; other fields in the body are ignored.
///
/// # Errors
///
/// Returns 400 if `id` is invalid or the body has no updatable field.
pub async fn update_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Document>,
) -> Result<Json<UpdateOutcome>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.products.update(id, body).await?))
}

/// Deletes one product.
///
/// # Endpoint
///
/// `DELETE /api/products/{id}` (admin)
pub async fn delete_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteOutcome>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.products.delete(id).await?))
}
