//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the stored record fields for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "short_code": "abc123",
///   "original_url": "https://example.com",
///   "clicks": 42,
///   "created_at": "2025-01-01T12:00:00Z",
///   "last_clicked": "2025-01-02T08:30:00Z",
///   "distinct_visitors": 17
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;
    let distinct_visitors = state.analytics_service.distinct_visitors(&code).await?;

    Ok(Json(StatsResponse {
        success: true,
        short_code: link.code,
        original_url: link.original_url,
        clicks: link.clicks,
        created_at: link.created_at,
        last_clicked: link.last_clicked,
        distinct_visitors,
    }))
}
