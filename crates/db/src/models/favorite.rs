//! Favorite models.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: DbId,
    pub imdb_id: String,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /favorites`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavorite {
    #[validate(length(min = 1, max = 30))]
    pub imdb_id: String,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Request body for `PUT /favorites/{imdbId}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFavorite {
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}
