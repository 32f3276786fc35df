//! IMDb identifier normalization and validation.
//!
//! IMDb ids are the public key for movies, votes, favorites, and list
//! entries. They are stored uppercase so lookups never depend on the
//! caller's casing.

use crate::error::CoreError;

/// Maximum accepted length for an IMDb id.
pub const MAX_IMDB_ID_LENGTH: usize = 30;

/// Normalize an IMDb id: trim surrounding whitespace and uppercase.
pub fn normalize_imdb_id(imdb_id: &str) -> String {
    imdb_id.trim().to_ascii_uppercase()
}

/// Validate and normalize an IMDb id.
///
/// Rejects empty or over-long ids; returns the normalized form otherwise.
pub fn validate_imdb_id(imdb_id: &str) -> Result<String, CoreError> {
    let normalized = normalize_imdb_id(imdb_id);
    if normalized.is_empty() {
        return Err(CoreError::Validation("imdbId must not be empty".into()));
    }
    if normalized.len() > MAX_IMDB_ID_LENGTH {
        return Err(CoreError::Validation(format!(
            "imdbId must be at most {MAX_IMDB_ID_LENGTH} characters"
        )));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(validate_imdb_id("  tt0111161 ").unwrap(), "TT0111161");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_imdb_id("   ").is_err());
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "t".repeat(MAX_IMDB_ID_LENGTH + 1);
        assert!(validate_imdb_id(&long).is_err());
    }
}
