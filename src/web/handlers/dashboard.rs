//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::state::AppState;

/// Number of recent links listed on the dashboard.
const DASHBOARD_LIMIT: i64 = 50;

/// One pre-formatted dashboard row.
pub struct DashboardRow {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: String,
    pub last_clicked: String,
}

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with the most recently created
/// links and aggregate totals.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub rows: Vec<DashboardRow>,
    pub total_links: i64,
    pub total_clicks: i64,
}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let links = state.link_service.recent_links(DASHBOARD_LIMIT).await?;
    let totals = state.link_service.totals().await?;

    let rows = links
        .into_iter()
        .map(|link| DashboardRow {
            code: link.code,
            original_url: link.original_url,
            clicks: link.clicks,
            created_at: link.created_at.format("%Y-%m-%d %H:%M").to_string(),
            last_clicked: link
                .last_clicked
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "Never".to_string()),
        })
        .collect();

    Ok(DashboardTemplate {
        rows,
        total_links: totals.total_links,
        total_clicks: totals.total_clicks,
    })
}
