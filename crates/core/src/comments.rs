//! Comment constants and the rate-limited edit window.
//!
//! A comment may be edited or removed by its author only within a fixed
//! window after creation; outside it the comment is frozen (admins may
//! still delete).

use crate::error::CoreError;
use crate::types::Timestamp;

/// Minimum comment length.
pub const MIN_COMMENT_LENGTH: usize = 3;

/// Maximum comment length.
pub const MAX_COMMENT_LENGTH: usize = 1_000;

/// How long after creation the author may edit or remove a comment.
pub const EDIT_WINDOW_MINS: i64 = 10;

/// Validate comment text length.
pub fn validate_comment_text(text: &str) -> Result<(), CoreError> {
    let len = text.trim().len();
    if len < MIN_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "comment must be at least {MIN_COMMENT_LENGTH} characters"
        )));
    }
    if len > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "comment must be at most {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Whether a comment created at `created_at` may still be mutated at `now`.
pub fn within_edit_window(created_at: Timestamp, now: Timestamp) -> bool {
    now - created_at <= chrono::Duration::minutes(EDIT_WINDOW_MINS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_text_length_bounds() {
        assert!(validate_comment_text("ok").is_err());
        assert!(validate_comment_text("good").is_ok());
        assert!(validate_comment_text(&"x".repeat(MAX_COMMENT_LENGTH)).is_ok());
        assert!(validate_comment_text(&"x".repeat(MAX_COMMENT_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_window_open_just_after_creation() {
        let now = Utc::now();
        assert!(within_edit_window(now - Duration::minutes(1), now));
    }

    #[test]
    fn test_window_closes_after_limit() {
        let now = Utc::now();
        let created = now - Duration::minutes(EDIT_WINDOW_MINS) - Duration::seconds(1);
        assert!(!within_edit_window(created, now));
    }

    #[test]
    fn test_window_inclusive_at_boundary() {
        let now = Utc::now();
        let created = now - Duration::minutes(EDIT_WINDOW_MINS);
        assert!(within_edit_window(created, now));
    }
}
