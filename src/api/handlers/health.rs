//! Liveness, health and fallback handlers.

use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DatabaseProbe, HealthResponse, ProbeState};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /`
pub async fn root_handler() -> &'static str {
    "symbol eye server is running"
}

/// Pings the document store and reports the result.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: the store answered the ping
/// - **503 Service Unavailable**: the ping failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "database": { "status": "ok", "latency_ms": 3 } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::from_database(probe_database(&state).await);

    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Answers unmatched routes with the API's JSON error body.
pub async fn fallback_handler() -> AppError {
    AppError::not_found("route not found")
}

/// Answers known paths hit with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

async fn probe_database(state: &AppState) -> DatabaseProbe {
    let started = Instant::now();
    let result = state.repository.ping().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(()) => DatabaseProbe {
            status: ProbeState::Ok,
            latency_ms,
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "health probe failed");
            DatabaseProbe {
                status: ProbeState::Error,
                latency_ms,
                error: Some(e.to_string()),
            }
        }
    }
}
