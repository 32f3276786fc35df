//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! All JSON is camelCase on the wire; columns stay snake_case.

pub mod comment;
pub mod community_top;
pub mod favorite;
pub mod list_entry;
pub mod movie;
pub mod user;
pub mod vote;

use serde::Serialize;

/// One page of a listing, as returned by paged repository queries.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}
