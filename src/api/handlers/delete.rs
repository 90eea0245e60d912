//! Handler for link deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::warn;

use crate::api::dto::delete::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a short link and its click events.
///
/// # Endpoint
///
/// `DELETE /api/delete/{code}`
///
/// # Cascade
///
/// The record delete and the event purge are two separate statements, not
/// one transaction. A purge failure is logged and swallowed; the link is
/// already gone and orphaned events are harmless.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    match state.analytics_service.purge(&code).await {
        Ok(removed) => {
            tracing::debug!(code, removed, "purged click events");
        }
        Err(e) => {
            warn!(code, error = %e, "failed to purge click events for deleted link");
        }
    }

    Ok(Json(DeleteResponse {
        success: true,
        message: "URL deleted successfully".to_string(),
    }))
}
