//! Request extractors that reject with the API's JSON error body.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections render as [`AppError::BadRequest`].
///
/// Used for every request body so that a missing content type or a body
/// that is not a JSON object yields `400 { "message": ... }` instead of
/// axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
