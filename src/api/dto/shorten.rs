//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// URL normalization (trimming, scheme prefixing) and custom code rules
/// are applied by the link service; validation here only caps payload size.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. May omit the scheme.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub original_url: String,

    /// Optional custom short code (at least 3 alphanumeric characters).
    pub custom_code: Option<String>,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub success: bool,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
