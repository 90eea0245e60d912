//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregate totals over all links, shown on the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTotals {
    pub total_links: i64,
    pub total_clicks: i64,
}

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link with `clicks = 0` and no `last_clicked`.
    ///
    /// The insert is attempted directly; the unique index on `code` is the
    /// only uniqueness check. There is no separate existence pre-check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically records a visit: `clicks = clicks + 1`,
    /// `last_clicked = now()`, in one UPDATE statement.
    ///
    /// Returns the destination URL, or `None` if the code does not exist.
    /// Safe under concurrent redirects of the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Deletes a link outright.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the code was
    /// unknown. Associated click events are not touched here; the caller
    /// purges them separately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists the most recently created links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Returns aggregate totals (link count, click sum) over all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn totals(&self) -> Result<LinkTotals, AppError>;
}
