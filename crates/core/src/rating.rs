//! Star-rating bounds shared by votes and comments.

use crate::error::CoreError;

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 10;

/// Validate that a rating falls within the accepted 1..=10 window.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}
