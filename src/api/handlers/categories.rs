//! Handlers for category endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ApiJson;
use crate::domain::entities::{DeleteOutcome, Document, DocumentId, InsertOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// Stores the posted document as a new category entry.
///
/// # Endpoint
///
/// `POST /api/category` (admin)
pub async fn create_category_handler(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Document>,
) -> Result<Json<InsertOutcome>, AppError> {
    Ok(Json(state.categories.create(body).await?))
}

/// Lists every category entry.
///
/// # Endpoint
///
/// `GET /api/category` (public)
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    Ok(Json(state.categories.list().await?))
}

/// Deletes one category entry.
///
/// # Endpoint
///
/// `DELETE /api/category/{id}` (admin)
///
/// # Errors
///
/// Returns 400 if `id` is not a valid identifier.
pub async fn delete_category_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteOutcome>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.categories.delete(id).await?))
}
