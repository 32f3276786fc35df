//! Movie catalog models.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub imdb_id: String,
    pub title: String,
    pub poster_url: String,
    pub year: String,
    pub synopsis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Display fields embedded in community-top items and list entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: DbId,
    pub title: String,
    pub poster_url: String,
    pub year: String,
}

/// Request body for `POST /movies`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    #[validate(length(min = 5, max = 30))]
    pub imdb_id: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 500))]
    pub poster_url: Option<String>,
    #[validate(length(max = 10))]
    pub year: Option<String>,
    #[validate(length(max = 2000))]
    pub synopsis: Option<String>,
}

/// Request body for `PUT /movies/{id}`. Absent fields are left untouched.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 500))]
    pub poster_url: Option<String>,
    #[validate(length(max = 10))]
    pub year: Option<String>,
    #[validate(length(max = 2000))]
    pub synopsis: Option<String>,
}
