//! Handler for the token issuing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::token::TokenResponse;
use crate::api::extract::ApiJson;
use crate::domain::entities::Document;
use crate::error::AppError;
use crate::state::AppState;

/// Signs the posted claims into a bearer token.
///
/// # Endpoint
///
/// `POST /api/jwt` (public)
///
/// # Request
///
/// Any JSON object; it is expected to carry at least an `email` claim.
///
/// ```json
/// { "email": "owner@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object.
pub async fn issue_token_handler(
    State(state): State<AppState>,
    ApiJson(claims): ApiJson<Document>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state.auth_service.issue_token(claims)?;
    Ok(Json(TokenResponse { token }))
}
