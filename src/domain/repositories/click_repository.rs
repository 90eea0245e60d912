//! Repository trait for the append-only click event log.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click event storage and analytics reads.
///
/// The event log is append-only; the only mutation besides insert is the
/// bulk delete that accompanies link deletion.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Callers on the
    /// redirect path log and swallow this error.
    async fn insert(&self, new_click: NewClick) -> Result<(), AppError>;

    /// Returns all events for a code, newest first.
    ///
    /// The analytics page folds this full scan into frequency tables on
    /// every view; there is no incremental aggregate maintenance.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_code(&self, code: &str) -> Result<Vec<Click>, AppError>;

    /// Counts distinct client IPs recorded for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_distinct_ips(&self, code: &str) -> Result<i64, AppError>;

    /// Bulk-deletes all events for a code, returning the number removed.
    ///
    /// Not transactional with the link delete; a crash between the two
    /// leaves orphaned events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<u64, AppError>;
}
