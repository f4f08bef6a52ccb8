//! Handler for the dashboard statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatisticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns approximate document counts for the admin dashboard.
///
/// # Endpoint
///
/// `GET /api/statistic` (admin)
///
/// # Response
///
/// ```json
/// { "totalProduct": 3, "totalCategory": 2, "totalServices": 0, "totalFAQ": 1 }
/// ```
pub async fn statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let stats = state.stats_service.catalog_stats().await?;
    Ok(Json(stats.into()))
}
