//! Domain error type shared by the persistence and HTTP layers.
//!
//! Rows in this system are addressed two ways: by numeric id (votes,
//! comments, list entries) and by string key (IMDb ids, emails).
//! [`CoreError::NotFound`] carries the key as text so both forms flow
//! through the same variant.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A row addressed by numeric id or string key does not exist.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found for a row addressed by its numeric id.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: id.to_string(),
        }
    }

    /// Not-found for a row addressed by a string key (IMDb id, email).
    pub fn not_found_key(entity: &'static str, key: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_by_id() {
        let err = CoreError::not_found("Vote", 42);
        assert_eq!(err.to_string(), "Vote 42 not found");
    }

    #[test]
    fn test_not_found_by_string_key() {
        let err = CoreError::not_found_key("Movie", "TT0111161");
        assert_eq!(err.to_string(), "Movie TT0111161 not found");
    }
}
