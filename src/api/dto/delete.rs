//! DTOs for link deletion endpoint.

use serde::Serialize;

/// Response for a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
