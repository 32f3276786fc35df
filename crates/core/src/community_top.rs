//! Community-top list bounds.
//!
//! Reads default to the first [`DEFAULT_TOP_LIMIT`] items of the curated
//! list and may fetch at most [`MAX_TOP_LIMIT`], the maximum size of the
//! list itself.

/// Default number of items returned when no limit is given.
pub const DEFAULT_TOP_LIMIT: i64 = 10;

/// Hard cap on the number of items a single request may fetch, equal to
/// the maximum size of the curated list itself.
pub const MAX_TOP_LIMIT: i64 = 50;

/// Clamp an optional caller-supplied limit into `1..=MAX_TOP_LIMIT`.
///
/// `None` yields [`DEFAULT_TOP_LIMIT`].
pub fn clamp_top_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(n) => n.clamp(1, MAX_TOP_LIMIT),
        None => DEFAULT_TOP_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(clamp_top_limit(None), DEFAULT_TOP_LIMIT);
    }

    #[test]
    fn test_limit_clamped_to_cap() {
        assert_eq!(clamp_top_limit(Some(500)), MAX_TOP_LIMIT);
        assert_eq!(clamp_top_limit(Some(0)), 1);
    }

    #[test]
    fn test_limit_within_range_passes_through() {
        assert_eq!(clamp_top_limit(Some(25)), 25);
    }
}
