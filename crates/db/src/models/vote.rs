//! Vote and ranking models.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `votes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: DbId,
    pub imdb_id: String,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /votes` (upsert by (imdbId, voter)).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertVote {
    #[validate(length(min = 1, max = 30))]
    pub imdb_id: String,
    #[validate(range(min = 1, max = 10))]
    pub rating: i32,
}

/// Request body for `PUT /votes/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVote {
    #[validate(range(min = 1, max = 10))]
    pub rating: i32,
}

/// One entry of the vote ranking. Derived, never stored: recomputed from
/// the vote set on every read. `avg_rating` is rounded to two decimals at
/// the output boundary only.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub imdb_id: String,
    pub avg_rating: f64,
    pub votes: i64,
    pub last_vote_at: Option<Timestamp>,
}

impl RankingEntry {
    /// The entry reported for a movie nobody has voted on. Callers treat
    /// "never voted" as zero, not as an error.
    pub fn zero(imdb_id: String) -> Self {
        RankingEntry {
            imdb_id,
            avg_rating: 0.0,
            votes: 0,
            last_vote_at: None,
        }
    }
}

/// A vote joined with its voter, shown to admins on the community top list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteWithUser {
    pub id: DbId,
    pub imdb_id: String,
    pub rating: i32,
    pub updated_at: Timestamp,
    pub user: VoteUser,
}

/// Voter identity embedded in [`VoteWithUser`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
}
