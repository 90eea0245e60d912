//! Link entity representing a shortened URL record.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// `clicks` is maintained denormalized on the row itself and bumped by a
/// single atomic UPDATE on every redirect; `last_clicked` is set alongside it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
            clicks,
            last_clicked,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn has_been_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Input data for creating a new link.
///
/// New rows always start with `clicks = 0` and `last_clicked = NULL`.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}
