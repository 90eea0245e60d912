//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Append-only. References its link by `link_code` value with no foreign key;
/// deleting a link bulk-deletes its events as a separate statement.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub link_code: String,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub device: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

/// Input data for recording a new click event.
///
/// All context fields are optional; derivation failures degrade to `None`
/// or "Unknown" rather than blocking the record.
#[derive(Debug, Clone, Default)]
pub struct NewClick {
    pub link_code: String,
    pub ip: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub device: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}
