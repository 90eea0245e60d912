//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::net::SocketAddr;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;
use crate::web::handlers::not_found::NotFoundTemplate;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically bump the click counter and fetch the destination
/// 2. Send a click event to the background worker (fire-and-forget)
/// 3. Return 302 Found
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full, the click is dropped; the counter bump from
/// step 1 has already happened, so redirect counts stay exact.
///
/// # Errors
///
/// An unknown code renders the HTML 404 page rather than a JSON error,
/// since this route is hit by browsers following shared links.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let original_url = match state.link_service.record_redirect(&code).await {
        Ok(url) => url,
        Err(AppError::NotFound { .. }) => {
            metrics::counter!("redirects_missing_total").increment(1);
            return Ok((StatusCode::NOT_FOUND, NotFoundTemplate).into_response());
        }
        Err(e) => return Err(e),
    };

    let ip = if state.behind_proxy {
        extract_client_ip(&headers, addr)
    } else {
        addr.ip().to_string()
    };

    let click_event = ClickEvent::new(
        code,
        Some(ip),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    // Fire-and-forget: a full queue drops the event, never the redirect.
    let _ = state.click_tx.try_send(click_event);

    metrics::counter!("redirects_total").increment(1);

    let location = HeaderValue::from_str(&original_url)
        .map_err(|_| AppError::internal("Stored URL is not a valid header value", json!({})))?;

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}
