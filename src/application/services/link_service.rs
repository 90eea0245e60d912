//! Link creation, redirect accounting, and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, LinkTotals};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_normalizer::{UrlNormalizationError, normalize_url};
use serde_json::json;

/// Maximum insert attempts for generated codes before giving up.
///
/// At 62^6 combinations a collision is already rare; repeated collisions
/// within one request indicate something is badly wrong, so the loop is
/// bounded instead of retrying forever.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service for creating and managing shortened links.
///
/// Uniqueness is never pre-checked: both the custom and generated code
/// paths attempt the INSERT directly and treat a unique-constraint
/// violation as the "taken" signal, closing the check-then-insert race.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Creates a short link for a URL, optionally with a custom code.
    ///
    /// The URL is trimmed and gets `https://` prepended when it lacks a
    /// scheme. Custom codes are validated (length >= 3, alphanumeric)
    /// before any store access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty/invalid URL, an invalid
    /// custom code, or a custom code that is already taken.
    /// Returns [`AppError::Internal`] if generated codes keep colliding or
    /// on database errors.
    pub async fn create_short_link(
        &self,
        original_url: &str,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let normalized_url = normalize_url(original_url).map_err(|e| match e {
            UrlNormalizationError::Empty => AppError::bad_request("URL is required", json!({})),
            other => AppError::bad_request(other.to_string(), json!({ "url": original_url })),
        })?;

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            return match self
                .repository
                .insert(NewLink {
                    code: custom.clone(),
                    original_url: normalized_url,
                })
                .await
            {
                Ok(link) => Ok(link),
                Err(AppError::Conflict { .. }) => Err(AppError::bad_request(
                    "Custom code already taken",
                    json!({ "code": custom }),
                )),
                Err(e) => Err(e),
            };
        }

        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let code = generate_code();

            match self
                .repository
                .insert(NewLink {
                    code,
                    original_url: normalized_url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": MAX_GENERATE_ATTEMPTS }),
        ))
    }

    /// Records a visit and returns the destination URL.
    ///
    /// The counter bump and `last_clicked` update happen in one atomic
    /// statement, so concurrent redirects never lose increments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn record_redirect(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .record_visit(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))
    }

    /// Deletes a link outright.
    ///
    /// Click events are not touched here; the caller purges them separately
    /// (best-effort, not transactional with this delete).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matched.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found("URL not found", json!({ "code": code })))
        }
    }

    /// Lists the most recently created links for the dashboard.
    pub async fn recent_links(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_recent(limit).await
    }

    /// Aggregate totals (link count, click sum) for the dashboard.
    pub async fn totals(&self) -> Result<LinkTotals, AppError> {
        self.repository.totals().await
    }

    /// Constructs the full short URL from the configured base URL and a code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn created_link(code: &str, url: &str) -> Link {
        Link::new(1, code.to_string(), url.to_string(), Utc::now(), 0, None)
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .withf(|new_link| {
                new_link.code.len() == 6
                    && new_link.code.chars().all(|c| c.is_ascii_alphanumeric())
                    && new_link.original_url == "https://example.com"
            })
            .times(1)
            .returning(|new_link| Ok(created_link(&new_link.code, &new_link.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.create_short_link("example.com", None).await.unwrap();
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.clicks, 0);
    }

    #[tokio::test]
    async fn test_create_prefixes_scheme() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .withf(|new_link| new_link.original_url == "https://example.com/path?q=1")
            .times(1)
            .returning(|new_link| Ok(created_link(&new_link.code, &new_link.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("example.com/path?q=1", None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_empty_url_rejected_before_store_access() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service.create_short_link("   ", None).await.unwrap_err();
        assert_eq!(err.message(), "URL is required");
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .withf(|new_link| new_link.code == "promo")
            .times(1)
            .returning(|new_link| Ok(created_link(&new_link.code, &new_link.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_short_link("https://example.com", Some("promo".to_string()))
            .await
            .unwrap();
        assert_eq!(link.code, "promo");
    }

    #[tokio::test]
    async fn test_custom_code_too_short_rejected_before_store_access() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_short_link("https://example.com", Some("ab".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Custom code must be at least 3 characters");
    }

    #[tokio::test]
    async fn test_custom_code_non_alphanumeric_rejected_before_store_access() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_short_link("https://example.com", Some("my-code".to_string()))
            .await
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Custom code can only contain letters and numbers"
        );
    }

    #[tokio::test]
    async fn test_custom_code_conflict_surfaces_as_taken() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(1).returning(|_| {
            Err(AppError::conflict("Short code already exists", json!({})))
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_short_link("https://example.com", Some("taken".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.message(), "Custom code already taken");
    }

    #[tokio::test]
    async fn test_generated_code_retries_on_conflict() {
        let mut mock_repo = MockLinkRepository::new();
        let mut calls = 0;
        mock_repo.expect_insert().times(2).returning(move |new_link| {
            calls += 1;
            if calls == 1 {
                Err(AppError::conflict("Short code already exists", json!({})))
            } else {
                Ok(created_link(&new_link.code, &new_link.original_url))
            }
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com", None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generated_code_gives_up_after_max_attempts() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .times(MAX_GENERATE_ATTEMPTS)
            .returning(|_| Err(AppError::conflict("Short code already exists", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_short_link("https://example.com", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_record_redirect_returns_destination() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_record_visit()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let service = LinkService::new(Arc::new(mock_repo));

        let url = service.record_redirect("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_record_redirect_unknown_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_record_visit()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service.record_redirect("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service.delete_link("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_short_url_joins_base_and_code() {
        let service = LinkService::new(Arc::new(MockLinkRepository::new()));
        assert_eq!(
            service.get_short_url("http://localhost:3000/", "abc123"),
            "http://localhost:3000/abc123"
        );
    }
}
