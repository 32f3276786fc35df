//! Curated community-top list models.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::movie::MovieSummary;
use crate::models::vote::VoteWithUser;

/// A community-top row joined with its movie's display fields.
#[derive(Debug, Clone, FromRow)]
pub struct CommunityTopRow {
    pub position: i32,
    pub imdb_id: String,
    pub notes: String,
    pub updated_at: Timestamp,
    pub movie_id: DbId,
    pub title: String,
    pub poster_url: String,
    pub year: String,
}

/// One item of the community top list as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityTopItem {
    pub imdb_id: String,
    pub notes: String,
    pub movie: MovieSummary,
    /// Raw votes for this movie; only present for admin callers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<Vec<VoteWithUser>>,
}

impl From<CommunityTopRow> for CommunityTopItem {
    fn from(row: CommunityTopRow) -> Self {
        CommunityTopItem {
            imdb_id: row.imdb_id,
            notes: row.notes,
            movie: MovieSummary {
                id: row.movie_id,
                title: row.title,
                poster_url: row.poster_url,
                year: row.year,
            },
            votes: None,
        }
    }
}

/// The full community top list payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityTopList {
    pub items: Vec<CommunityTopItem>,
    pub updated_at: Option<Timestamp>,
}

/// One item of a `PUT /community-top` request.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommunityTopItemInput {
    #[validate(length(min = 1, max = 30))]
    pub imdb_id: String,
    #[validate(length(max = 280))]
    pub notes: Option<String>,
}

/// Request body for `PUT /community-top`: the whole list is replaced.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommunityTop {
    #[validate(length(max = 50), nested)]
    pub items: Vec<CommunityTopItemInput>,
}
