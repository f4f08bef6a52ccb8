//! Handlers for gallery endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ApiJson;
use crate::domain::entities::{DeleteOutcome, Document, DocumentId, InsertOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/gallery` (admin)
pub async fn create_gallery_item_handler(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Document>,
) -> Result<Json<InsertOutcome>, AppError> {
    Ok(Json(state.gallery.create(body).await?))
}

/// `GET /api/gallery` (public)
pub async fn list_gallery_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    Ok(Json(state.gallery.list().await?))
}

/// `DELETE /api/gallery/{id}` (admin)
pub async fn delete_gallery_item_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteOutcome>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.gallery.delete(id).await?))
}
