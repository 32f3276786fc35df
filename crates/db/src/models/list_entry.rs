//! Watch-list entry models, filters, and statistics.

use std::collections::BTreeMap;

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `list_entries` table.
///
/// `title`, `poster_url`, and `year` are display fields snapshotted from
/// the movie at write time and refreshed on every upsert.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub imdb_id: String,
    pub movie_id: DbId,
    pub title: String,
    pub poster_url: String,
    pub year: String,
    pub status: String,
    pub score: Option<f64>,
    pub progress: i32,
    pub rewatch_count: i32,
    pub priority: String,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    pub notes: String,
    pub tags: Vec<String>,
    pub is_hidden: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /my-list` (create-or-update by (user, imdbId)).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListEntry {
    #[validate(length(min = 1, max = 30))]
    pub imdb_id: String,
    pub status: Option<String>,
    pub score: Option<f64>,
    #[validate(range(min = 0, max = 1000))]
    pub progress: Option<i32>,
    #[validate(range(min = 0, max = 1000))]
    pub rewatch_count: Option<i32>,
    pub priority: Option<String>,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_hidden: Option<bool>,
}

/// Request body for `PUT /my-list/{id}`. Absent fields are left untouched.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListEntry {
    pub status: Option<String>,
    pub score: Option<f64>,
    #[validate(range(min = 0, max = 1000))]
    pub progress: Option<i32>,
    #[validate(range(min = 0, max = 1000))]
    pub rewatch_count: Option<i32>,
    pub priority: Option<String>,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_hidden: Option<bool>,
}

impl UpdateListEntry {
    /// Whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.score.is_none()
            && self.progress.is_none()
            && self.rewatch_count.is_none()
            && self.priority.is_none()
            && self.started_at.is_none()
            && self.finished_at.is_none()
            && self.notes.is_none()
            && self.tags.is_none()
            && self.is_hidden.is_none()
    }
}

/// Query parameters for `GET /my-list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntryFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Summary of one user's watch list, recomputed from the entry set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStats {
    /// Entry count per status. Empty map for a user with no entries.
    pub status_counts: BTreeMap<String, i64>,
    pub total_entries: i64,
    pub total_progress: i64,
    pub total_rewatch_count: i64,
    pub last_activity_at: Option<Timestamp>,
    /// Mean score over entries with a non-null score; null when none are
    /// scored. Unscored entries never shift the average.
    pub average_score: Option<f64>,
    pub scored_entries: i64,
}

impl ListStats {
    /// Well-defined zero values for a user with no entries.
    pub fn empty() -> Self {
        ListStats {
            status_counts: BTreeMap::new(),
            total_entries: 0,
            total_progress: 0,
            total_rewatch_count: 0,
            last_activity_at: None,
            average_score: None,
            scored_entries: 0,
        }
    }
}
