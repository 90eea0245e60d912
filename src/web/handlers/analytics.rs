//! Per-link analytics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::analytics_service::FrequencyTable;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found::NotFoundTemplate;

/// One pre-formatted recent click event row.
pub struct EventRow {
    pub clicked_at: String,
    pub country: String,
    pub city: String,
    pub device: String,
    pub browser: String,
    pub referer: String,
}

/// Template for the per-link analytics page.
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub distinct_visitors: i64,
    pub countries: FrequencyTable,
    pub cities: FrequencyTable,
    pub devices: FrequencyTable,
    pub browsers: FrequencyTable,
    pub operating_systems: FrequencyTable,
    pub referrers: FrequencyTable,
    pub recent: Vec<EventRow>,
}

/// Renders the analytics breakdown for one short link.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// The full event log is scanned and folded on every page view.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let link = match state.link_service.get_link_by_code(&code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            return Ok((StatusCode::NOT_FOUND, NotFoundTemplate).into_response());
        }
        Err(e) => return Err(e),
    };

    let report = state.analytics_service.report(&code).await?;

    let recent = report
        .recent
        .into_iter()
        .map(|click| EventRow {
            clicked_at: click.clicked_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            country: click.country.unwrap_or_else(|| "Unknown".to_string()),
            city: click.city.unwrap_or_else(|| "Unknown".to_string()),
            device: click.device.unwrap_or_else(|| "Unknown".to_string()),
            browser: click.browser.unwrap_or_else(|| "Unknown".to_string()),
            referer: click.referer.unwrap_or_else(|| "Direct".to_string()),
        })
        .collect();

    let template = AnalyticsTemplate {
        code: link.code,
        original_url: link.original_url,
        clicks: link.clicks,
        distinct_visitors: report.distinct_ips,
        countries: report.countries,
        cities: report.cities,
        devices: report.devices,
        browsers: report.browsers,
        operating_systems: report.operating_systems,
        referrers: report.referrers,
        recent,
    };

    Ok(template.into_response())
}
