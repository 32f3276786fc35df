//! Repository for the `votes` table, including the ranking aggregation.

use cinelog_core::pagination::{clamp_page, clamp_page_size, page_offset};
use cinelog_core::ranking::{clamp_ranking_limit, round_avg};
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::vote::{RankingEntry, Vote, VoteUser, VoteWithUser};
use crate::models::Page;

/// Column list for votes queries.
const VOTE_COLUMNS: &str = "id, imdb_id, movie_id, user_id, rating, created_at, updated_at";

/// Vote ranking aggregation: one group per movie with full-precision
/// average, vote count, and most recent vote time. Ordered by avg DESC,
/// count DESC, last vote DESC so ties resolve deterministically.
const RANKING_QUERY: &str = "SELECT imdb_id,
        AVG(rating)::DOUBLE PRECISION AS avg_rating,
        COUNT(*) AS votes,
        MAX(updated_at) AS last_vote_at
     FROM votes
     WHERE ($1::text IS NULL OR imdb_id = $1)
     GROUP BY imdb_id
     ORDER BY avg_rating DESC, votes DESC, last_vote_at DESC
     LIMIT $2";

/// Provides vote CRUD and the ranking aggregation.
pub struct VoteRepo;

impl VoteRepo {
    /// Record or replace a voter's rating for a movie.
    ///
    /// A single conditional write against `uq_votes_imdb_user`: concurrent
    /// upserts for the same (movie, voter) can never create duplicate rows.
    pub async fn upsert(
        pool: &PgPool,
        imdb_id: &str,
        movie_id: DbId,
        user_id: DbId,
        rating: i32,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (imdb_id, movie_id, user_id, rating)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (imdb_id, user_id)
             DO UPDATE SET rating = EXCLUDED.rating, updated_at = now()
             RETURNING {VOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(imdb_id)
            .bind(movie_id)
            .bind(user_id)
            .bind(rating)
            .fetch_one(pool)
            .await
    }

    /// List one voter's votes, most recently updated first, paged.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Vote>, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let query = format!(
            "SELECT {VOTE_COLUMNS} FROM votes
             WHERE user_id = $1
             ORDER BY updated_at DESC
             LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM votes WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(Page {
            items,
            total,
            page,
            page_size,
        })
    }

    /// Find a vote by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {VOTE_COLUMNS} FROM votes WHERE id = $1");
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vote by id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rank all movies by popularity. Averages are rounded to two decimals
    /// at this output boundary; the aggregation itself runs at full
    /// precision.
    pub async fn ranking(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<RankingEntry>, sqlx::Error> {
        let limit = clamp_ranking_limit(limit);
        let mut entries = sqlx::query_as::<_, RankingEntry>(RANKING_QUERY)
            .bind(None::<String>)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        for entry in &mut entries {
            entry.avg_rating = round_avg(entry.avg_rating);
        }
        Ok(entries)
    }

    /// Run the ranking aggregation restricted to a single movie.
    ///
    /// Returns the zero-value entry (avg 0, count 0, last vote null) when
    /// nobody has voted on it.
    pub async fn ranking_for_movie(
        pool: &PgPool,
        imdb_id: &str,
    ) -> Result<RankingEntry, sqlx::Error> {
        let entry = sqlx::query_as::<_, RankingEntry>(RANKING_QUERY)
            .bind(Some(imdb_id))
            .bind(1_i64)
            .fetch_optional(pool)
            .await?;
        Ok(match entry {
            Some(mut entry) => {
                entry.avg_rating = round_avg(entry.avg_rating);
                entry
            }
            None => RankingEntry::zero(imdb_id.to_string()),
        })
    }

    /// All votes for a set of movies, joined with their voters. Used by
    /// the admin view of the community top list.
    pub async fn list_for_movies(
        pool: &PgPool,
        imdb_ids: &[String],
    ) -> Result<Vec<VoteWithUser>, sqlx::Error> {
        if imdb_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, VoteWithUserRow>(
            "SELECT v.id, v.imdb_id, v.rating, v.updated_at,
                    u.id AS voter_id, u.name AS voter_name,
                    u.email AS voter_email, u.role AS voter_role
             FROM votes v
             INNER JOIN users u ON u.id = v.user_id
             WHERE v.imdb_id = ANY($1)
             ORDER BY v.updated_at DESC",
        )
        .bind(imdb_ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(VoteWithUser::from).collect())
    }
}

/// Flat join row backing [`VoteWithUser`].
#[derive(sqlx::FromRow)]
struct VoteWithUserRow {
    id: DbId,
    imdb_id: String,
    rating: i32,
    updated_at: cinelog_core::types::Timestamp,
    voter_id: DbId,
    voter_name: String,
    voter_email: String,
    voter_role: String,
}

impl From<VoteWithUserRow> for VoteWithUser {
    fn from(row: VoteWithUserRow) -> Self {
        VoteWithUser {
            id: row.id,
            imdb_id: row.imdb_id,
            rating: row.rating,
            updated_at: row.updated_at,
            user: VoteUser {
                id: row.voter_id,
                name: row.voter_name,
                email: row.voter_email,
                role: row.voter_role,
            },
        }
    }
}
