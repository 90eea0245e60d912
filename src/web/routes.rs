//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{analytics_handler, dashboard_handler, home_handler};
use axum::{Router, routing::get};

/// All web page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page with the shorten form
/// - `GET /dashboard` - Recent links with aggregate totals
/// - `GET /analytics/{code}` - Per-link analytics breakdown
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/analytics/{code}", get(analytics_handler))
}
