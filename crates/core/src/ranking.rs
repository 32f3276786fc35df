//! Ranking aggregation rules.
//!
//! The grouping itself (AVG, COUNT, MAX per imdb id) runs as a single SQL
//! aggregation in the vote repository. This module owns the parts that are
//! deliberate design choices rather than plain SQL: the result-limit
//! window, the two-decimal output rounding, and the zero-value entry
//! returned for a movie nobody has voted on.

/// Default number of ranking entries returned when no limit is given.
pub const DEFAULT_RANKING_LIMIT: i64 = 50;

/// Hard cap on the number of ranking entries a single request may fetch.
pub const MAX_RANKING_LIMIT: i64 = 200;

/// Clamp an optional caller-supplied limit into `1..=MAX_RANKING_LIMIT`.
///
/// `None` yields [`DEFAULT_RANKING_LIMIT`].
pub fn clamp_ranking_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(n) => n.clamp(1, MAX_RANKING_LIMIT),
        None => DEFAULT_RANKING_LIMIT,
    }
}

/// Round an average rating to two decimal places for output.
///
/// Averages are accumulated at full floating precision in the database;
/// rounding happens only here, at the output boundary.
pub fn round_avg(avg: f64) -> f64 {
    (avg * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(clamp_ranking_limit(None), DEFAULT_RANKING_LIMIT);
    }

    #[test]
    fn test_limit_clamped_to_cap() {
        assert_eq!(clamp_ranking_limit(Some(10_000)), MAX_RANKING_LIMIT);
        assert_eq!(clamp_ranking_limit(Some(0)), 1);
        assert_eq!(clamp_ranking_limit(Some(-5)), 1);
    }

    #[test]
    fn test_limit_within_range_passes_through() {
        assert_eq!(clamp_ranking_limit(Some(25)), 25);
        assert_eq!(clamp_ranking_limit(Some(MAX_RANKING_LIMIT)), MAX_RANKING_LIMIT);
    }

    #[test]
    fn test_round_avg_two_decimals() {
        // 8 + 6 => mean 7.0
        assert_eq!(round_avg(7.0), 7.0);
        // 1/3 repeating rounds to 2 places
        assert_eq!(round_avg(22.0 / 3.0), 7.33);
        assert_eq!(round_avg(23.0 / 3.0), 7.67);
        // 25/3 = 8.333... -> 8.33
        assert_eq!(round_avg(25.0 / 3.0), 8.33);
    }
}
