//! API route configuration.

use crate::api::handlers::{delete_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create a shortened URL
/// - `GET    /stats/{code}`   - Stored record fields for a link
/// - `DELETE /delete/{code}`  - Delete a link and its click events
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/delete/{code}", delete(delete_handler))
}
