//! Handlers for service offering endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ApiJson;
use crate::domain::entities::{DeleteOutcome, Document, DocumentId, InsertOutcome, UpdateOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// Stores the posted document as a new service offering.
///
/// # Endpoint
///
/// `POST /api/services` (admin)
pub async fn create_service_handler(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Document>,
) -> Result<Json<InsertOutcome>, AppError> {
    Ok(Json(state.services.create(body).await?))
}

/// Lists every service offering.
///
/// # Endpoint
///
/// `GET /api/services` (public)
pub async fn list_services_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    Ok(Json(state.services.list().await?))
}

/// Partially updates a service offering.
///
/// # Endpoint
///
/// `PATCH /api/services/{id}` (admin)
///
/// Every top-level field in the body except `_id` is overwritten; fields
/// absent from the body keep their stored values.
///
/// # Errors
///
/// Returns 400 if `id` is invalid or the body has no updatable field.
pub async fn update_service_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Document>,
) -> Result<Json<UpdateOutcome>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.services.update(id, body).await?))
}

/// Deletes one service offering.
///
/// # Endpoint
///
/// `DELETE /api/services/{id}` (admin)
///
/// # Errors
///
/// Returns 400 if `id` is not a valid identifier.
pub async fn delete_service_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteOutcome>, AppError> {
    let id = DocumentId::parse(&id)?;
    Ok(Json(state.services.delete(id).await?))
}
