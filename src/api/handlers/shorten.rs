//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "example.com",
///   "custom_code": "promo"  // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "short_code": "promo",
///   "short_url": "http://localhost:3000/promo",
///   "original_url": "https://example.com",
///   "created_at": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty, the custom code is invalid,
/// or the custom code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    // The web form sends custom_code as an empty string when unset.
    let custom_code = payload
        .custom_code
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let link = state
        .link_service
        .create_short_link(&payload.original_url, custom_code)
        .await?;

    let short_url = state.link_service.get_short_url(&state.base_url, &link.code);

    metrics::counter!("links_created_total").increment(1);

    Ok(Json(ShortenResponse {
        success: true,
        short_code: link.code,
        short_url,
        original_url: link.original_url,
        created_at: link.created_at,
    }))
}
