//! Short code generation and validation utilities.
//!
//! Generated codes are 6 random alphanumeric characters; custom codes are
//! validated for length and character set before any database access.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Minimum length of user-supplied custom codes.
pub const MIN_CUSTOM_CODE_LENGTH: usize = 3;

/// The 62-symbol alphabet used for generated codes.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 6-character alphanumeric short code.
///
/// Uniqueness is not guaranteed here; the caller resolves collisions against
/// the database unique index on insert.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: at least 3 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated. Availability is
/// not checked here; the insert path treats a unique-constraint violation as
/// the "taken" signal.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < MIN_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be at least 3 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters and numbers",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
