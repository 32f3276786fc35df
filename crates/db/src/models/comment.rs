//! Comment models.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub imdb_id: String,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub author_name: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /comments`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    #[validate(length(min = 1, max = 30))]
    pub imdb_id: String,
    #[validate(length(min = 3, max = 1000))]
    pub comment: String,
    #[validate(range(min = 1, max = 10))]
    pub rating: i32,
}

/// Request body for `PUT /comments/{id}`. Absent fields are left untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateComment {
    #[validate(length(min = 3, max = 1000))]
    pub comment: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub rating: Option<i32>,
}
