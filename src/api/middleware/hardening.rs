//! Request hardening: timeouts, panic recovery and CORS.

use std::any::Any;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::error::AppError;

/// Fails requests that take longer than `limit` with `408 Request Timeout`.
///
/// Dropping the handler future cancels any in-flight database call.
///
/// ```rust,ignore
/// router.layer(middleware::from_fn_with_state(Duration::from_secs(30), hardening::timeout));
/// ```
pub async fn timeout(
    State(limit): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_owned();

    tokio::time::timeout(limit, next.run(req))
        .await
        .map_err(|_| {
            tracing::warn!(%path, limit_ms = limit.as_millis() as u64, "request timed out");
            AppError::Timeout
        })
}

/// Converts a handler panic into `500 { "message": "internal server error" }`.
///
/// The panic is logged and the process keeps serving.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_response as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "handler panicked");

    AppError::internal("internal server error").into_response()
}

/// Allows the storefront to call the API from any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
}
