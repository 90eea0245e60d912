//! DTOs for link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response with the stored record fields for a short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
    /// Distinct client IPs observed in the click event log.
    pub distinct_visitors: i64,
}
