//! Handlers for FAQ endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ApiJson;
use crate::domain::entities::{DeleteOutcome, Document, DocumentId, InsertOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a question/answer entry.
///
/// # Endpoint
///
/// `POST /api/faq` (admin)
pub async fn create_faq_item_handler(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Document>,
) -> Result<Json<InsertOutcome>, AppError> {
    Ok(Json(state.faq.create(body).await?))
}

/// `GET /api/faq` (public)
pub async fn list_faq_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    Ok(Json(state.faq.list().await?))
}

/// Removes a FAQ entry. Unknown ids report `deletedCount: 0`.
///
/// # Endpoint
///
/// `DELETE /api/faq/{id}` (admin)
pub async fn delete_faq_item_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteOutcome>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.faq.delete(id).await?))
}
