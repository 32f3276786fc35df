//! Watch-list entry constants and validation.
//!
//! Defines the status/priority vocabularies, the tag normalization rules,
//! and the start/finish date invariant enforced before any persistence.

use crate::error::CoreError;
use crate::types::Timestamp;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Entry is currently being watched.
pub const STATUS_WATCHING: &str = "watching";

/// Entry has been watched to the end.
pub const STATUS_COMPLETED: &str = "completed";

/// Entry is paused.
pub const STATUS_ON_HOLD: &str = "on-hold";

/// Entry was abandoned.
pub const STATUS_DROPPED: &str = "dropped";

/// Entry is queued for a future watch.
pub const STATUS_PLAN_TO_WATCH: &str = "plan-to-watch";

/// Entry is being watched again.
pub const STATUS_REWATCHING: &str = "rewatching";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_WATCHING,
    STATUS_COMPLETED,
    STATUS_ON_HOLD,
    STATUS_DROPPED,
    STATUS_PLAN_TO_WATCH,
    STATUS_REWATCHING,
];

/// All valid priority values.
pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high"];

/// Default status assigned when none is supplied at creation.
pub const DEFAULT_STATUS: &str = STATUS_PLAN_TO_WATCH;

/// Default priority assigned when none is supplied at creation.
pub const DEFAULT_PRIORITY: &str = "medium";

/// Maximum number of tags per entry.
pub const MAX_TAGS: usize = 10;

/// Maximum length of a single tag.
pub const MAX_TAG_LENGTH: usize = 30;

/// Maximum length of the free-text notes field.
pub const MAX_NOTES_LENGTH: usize = 1_000;

/// Inclusive score bounds (scores may be fractional).
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Upper bound for progress and rewatch counters.
pub const MAX_COUNTER: i32 = 1_000;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate that a priority string is one of the accepted values.
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid priority '{priority}'. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        )))
    }
}

/// Validate a score against the 0..=10 window.
pub fn validate_score(score: f64) -> Result<(), CoreError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) || !score.is_finite() {
        return Err(CoreError::Validation(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}"
        )));
    }
    Ok(())
}

/// Validate a progress or rewatch counter.
pub fn validate_counter(name: &str, value: i32) -> Result<(), CoreError> {
    if !(0..=MAX_COUNTER).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0 and {MAX_COUNTER}"
        )));
    }
    Ok(())
}

/// Enforce the date invariant: finish, if both dates are present, must not
/// precede start.
pub fn validate_date_window(
    started_at: Option<Timestamp>,
    finished_at: Option<Timestamp>,
) -> Result<(), CoreError> {
    if let (Some(start), Some(finish)) = (started_at, finished_at) {
        if finish < start {
            return Err(CoreError::Validation(
                "finishedAt must not precede startedAt".into(),
            ));
        }
    }
    Ok(())
}

/// Normalize a tag set: trim each tag, drop empties, deduplicate while
/// preserving first-seen order, then enforce the per-tag length and the
/// MAX_TAGS cap.
pub fn normalize_tags(tags: &[String]) -> Result<Vec<String>, CoreError> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.len() > MAX_TAG_LENGTH {
            return Err(CoreError::Validation(format!(
                "tags must be at most {MAX_TAG_LENGTH} characters each"
            )));
        }
        if !seen.iter().any(|s: &String| s == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    if seen.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "at most {MAX_TAGS} tags are allowed"
        )));
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    #[test]
    fn test_status_vocabulary() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
        assert_matches!(validate_status("binging"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_priority_vocabulary() {
        assert!(validate_priority("high").is_ok());
        assert!(validate_priority("urgent").is_err());
    }

    #[test]
    fn test_score_window() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(10.0).is_ok());
        assert!(validate_score(7.5).is_ok());
        assert!(validate_score(10.1).is_err());
        assert!(validate_score(-0.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
    }

    #[test]
    fn test_date_window() {
        let start = Utc::now();
        let finish = start + Duration::days(2);
        assert!(validate_date_window(Some(start), Some(finish)).is_ok());
        assert!(validate_date_window(Some(finish), Some(start)).is_err());
        // One-sided and absent dates are always fine.
        assert!(validate_date_window(Some(start), None).is_ok());
        assert!(validate_date_window(None, Some(finish)).is_ok());
        assert!(validate_date_window(None, None).is_ok());
        // Same instant is allowed.
        assert!(validate_date_window(Some(start), Some(start)).is_ok());
    }

    #[test]
    fn test_tags_trimmed_and_deduped() {
        let tags = vec![
            "  noir ".to_string(),
            "noir".to_string(),
            "".to_string(),
            " classic".to_string(),
        ];
        let normalized = normalize_tags(&tags).unwrap();
        assert_eq!(normalized, vec!["noir".to_string(), "classic".to_string()]);
    }

    #[test]
    fn test_tags_cap() {
        let tags: Vec<String> = (0..=MAX_TAGS).map(|i| format!("tag-{i}")).collect();
        assert!(normalize_tags(&tags).is_err());
    }

    #[test]
    fn test_tag_length_limit() {
        let tags = vec!["x".repeat(MAX_TAG_LENGTH + 1)];
        assert!(normalize_tags(&tags).is_err());
    }
}
