//! Repository for the curated `community_top_items` table.
//!
//! The list is a single ordered collection; updates replace it wholesale
//! inside one transaction so readers never observe a half-written list.

use cinelog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::community_top::CommunityTopRow;

/// A resolved item ready for insertion (movie ensured by the caller).
#[derive(Debug)]
pub struct ResolvedTopItem {
    pub imdb_id: String,
    pub notes: String,
    pub movie_id: DbId,
}

/// Provides read/replace operations for the community top list.
pub struct CommunityTopRepo;

impl CommunityTopRepo {
    /// The current list joined with movie display fields, in curated order.
    pub async fn get_items(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<CommunityTopRow>, sqlx::Error> {
        sqlx::query_as::<_, CommunityTopRow>(
            "SELECT cti.position, cti.imdb_id, cti.notes, cti.updated_at,
                    m.id AS movie_id, m.title, m.poster_url, m.year
             FROM community_top_items cti
             INNER JOIN movies m ON m.id = cti.movie_id
             ORDER BY cti.position ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// When the list was last curated, or `None` if it is empty.
    pub async fn last_updated_at(pool: &PgPool) -> Result<Option<Timestamp>, sqlx::Error> {
        let (max,): (Option<Timestamp>,) =
            sqlx::query_as("SELECT MAX(updated_at) FROM community_top_items")
                .fetch_one(pool)
                .await?;
        Ok(max)
    }

    /// Replace the whole list with `items`, preserving their order as the
    /// curated positions. Runs in one transaction.
    pub async fn replace(
        pool: &PgPool,
        items: &[ResolvedTopItem],
        updated_by: DbId,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM community_top_items")
            .execute(&mut *tx)
            .await?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO community_top_items (position, imdb_id, movie_id, notes, updated_by)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(position as i32)
            .bind(&item.imdb_id)
            .bind(item.movie_id)
            .bind(&item.notes)
            .bind(updated_by)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}
