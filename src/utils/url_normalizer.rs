//! URL normalization for the shorten endpoint.
//!
//! Incoming URLs without a scheme get `https://` prepended; everything else
//! is preserved as the user supplied it. The result is parsed once to reject
//! garbage and dangerous schemes.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Normalizes a URL for storage.
///
/// # Rules
///
/// 1. Leading/trailing whitespace is trimmed; an empty result is an error.
/// 2. URLs lacking an `http://` or `https://` prefix get `https://` prepended.
/// 3. The result must parse as a valid HTTP(S) URL, but is stored in the
///    user-supplied form (no host lowercasing or path rewriting).
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::UnsupportedProtocol`] for explicit non-HTTP(S)
/// schemes, and [`UrlNormalizationError::InvalidFormat`] for anything the
/// `url` crate rejects.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(
///     normalize_url("http://example.com/a?b=c").unwrap(),
///     "http://example.com/a?b=c"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        // Reject explicit schemes like javascript: or ftp: before prefixing.
        if explicit_scheme(trimmed).is_some() {
            return Err(UrlNormalizationError::UnsupportedProtocol);
        }
        format!("https://{trimmed}")
    };

    let parsed =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    if parsed.host_str().is_none() {
        return Err(UrlNormalizationError::InvalidFormat(
            "missing host".to_string(),
        ));
    }

    Ok(candidate)
}

/// Detects an explicit URL scheme in scheme-less-looking input.
///
/// `host:8080/path` is a bare host with a port, not a scheme, so a purely
/// numeric segment after the colon is not treated as one.
fn explicit_scheme(input: &str) -> Option<&str> {
    let colon = input.find(':')?;
    let (scheme, rest) = input.split_at(colon);
    let rest = &rest[1..];

    let mut chars = scheme.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }

    let authority_like = rest.split('/').next().unwrap_or("");
    if !rest.starts_with("//")
        && !authority_like.is_empty()
        && authority_like.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    Some(scheme)
}
