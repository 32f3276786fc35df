//! Repository for the `list_entries` table (per-user watch lists).

use std::collections::BTreeMap;

use cinelog_core::pagination::{clamp_page, clamp_page_size, page_offset};
use cinelog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::list_entry::{ListEntry, ListEntryFilter, ListStats};
use crate::models::Page;
use crate::repositories::like_pattern;

/// Column list for list_entries queries.
const ENTRY_COLUMNS: &str = "id, user_id, imdb_id, movie_id, title, poster_url, year, \
    status, score, progress, rewatch_count, priority, started_at, finished_at, \
    notes, tags, is_hidden, created_at, updated_at";

/// Field values applied on create or patch. `None` leaves the stored value
/// (or its column default) untouched.
#[derive(Debug, Default)]
pub struct ListEntryPatch {
    pub status: Option<String>,
    pub score: Option<f64>,
    pub progress: Option<i32>,
    pub rewatch_count: Option<i32>,
    pub priority: Option<String>,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_hidden: Option<bool>,
}

/// Provides CRUD, filtering, and statistics for watch-list entries.
pub struct ListEntryRepo;

impl ListEntryRepo {
    /// Find one user's entry for a movie.
    pub async fn find_by_user_and_imdb(
        pool: &PgPool,
        user_id: DbId,
        imdb_id: &str,
    ) -> Result<Option<ListEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM list_entries
             WHERE user_id = $1 AND imdb_id = $2"
        );
        sqlx::query_as::<_, ListEntry>(&query)
            .bind(user_id)
            .bind(imdb_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an entry by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<ListEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM list_entries
             WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, ListEntry>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create an entry with the movie's display fields snapshotted in.
    ///
    /// Violates `uq_list_entries_user_imdb` if the user already tracks the
    /// movie; callers route first writes here and later writes to `update`.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        imdb_id: &str,
        movie_id: DbId,
        title: &str,
        poster_url: &str,
        year: &str,
        patch: &ListEntryPatch,
    ) -> Result<ListEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO list_entries
                (user_id, imdb_id, movie_id, title, poster_url, year,
                 status, score, progress, rewatch_count, priority,
                 started_at, finished_at, notes, tags, is_hidden)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'plan-to-watch'), $8,
                     COALESCE($9, 0), COALESCE($10, 0),
                     COALESCE($11, 'medium'), $12, $13,
                     COALESCE($14, ''), COALESCE($15, '{{}}'),
                     COALESCE($16, FALSE))
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, ListEntry>(&query)
            .bind(user_id)
            .bind(imdb_id)
            .bind(movie_id)
            .bind(title)
            .bind(poster_url)
            .bind(year)
            .bind(&patch.status)
            .bind(patch.score)
            .bind(patch.progress)
            .bind(patch.rewatch_count)
            .bind(&patch.priority)
            .bind(patch.started_at)
            .bind(patch.finished_at)
            .bind(&patch.notes)
            .bind(&patch.tags)
            .bind(patch.is_hidden)
            .fetch_one(pool)
            .await
    }

    /// Patch an entry, scoped to its owner; absent fields are left
    /// untouched. When `display` is given, the denormalized movie fields
    /// are refreshed as well.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        patch: &ListEntryPatch,
        display: Option<(&str, &str, &str)>,
    ) -> Result<Option<ListEntry>, sqlx::Error> {
        let (title, poster_url, year) = match display {
            Some((t, p, y)) => (Some(t), Some(p), Some(y)),
            None => (None, None, None),
        };
        let query = format!(
            "UPDATE list_entries SET
                status = COALESCE($1, status),
                score = COALESCE($2, score),
                progress = COALESCE($3, progress),
                rewatch_count = COALESCE($4, rewatch_count),
                priority = COALESCE($5, priority),
                started_at = COALESCE($6, started_at),
                finished_at = COALESCE($7, finished_at),
                notes = COALESCE($8, notes),
                tags = COALESCE($9, tags),
                is_hidden = COALESCE($10, is_hidden),
                title = COALESCE($11, title),
                poster_url = COALESCE($12, poster_url),
                year = COALESCE($13, year),
                updated_at = now()
             WHERE id = $14 AND user_id = $15
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, ListEntry>(&query)
            .bind(&patch.status)
            .bind(patch.score)
            .bind(patch.progress)
            .bind(patch.rewatch_count)
            .bind(&patch.priority)
            .bind(patch.started_at)
            .bind(patch.finished_at)
            .bind(&patch.notes)
            .bind(&patch.tags)
            .bind(patch.is_hidden)
            .bind(title)
            .bind(poster_url)
            .bind(year)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry, scoped to its owner.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM list_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Filterable, sortable, paged listing of one user's entries.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        filter: &ListEntryFilter,
    ) -> Result<Page<ListEntry>, sqlx::Error> {
        let page = clamp_page(filter.page);
        let page_size = clamp_page_size(filter.page_size);
        let search = filter.search.as_deref().map(like_pattern);

        // Sort column is whitelisted here; user input never reaches the
        // ORDER BY clause directly.
        let sort_column = match filter.sort_by.as_deref() {
            Some("score") => "score",
            Some("priority") => "priority",
            Some("progress") => "progress",
            Some("title") => "title",
            Some("startedAt") => "started_at",
            _ => "updated_at",
        };
        let direction = match filter.sort_direction.as_deref() {
            Some("asc") => "ASC",
            _ => "DESC",
        };
        let secondary = if sort_column == "updated_at" {
            String::new()
        } else {
            ", updated_at DESC".to_string()
        };

        const FILTER_CLAUSE: &str = "WHERE user_id = $1
              AND ($2::text IS NULL OR status = $2)
              AND ($3::text IS NULL OR priority = $3)
              AND ($4::text IS NULL
                   OR title ILIKE $4 OR notes ILIKE $4 OR imdb_id ILIKE $4)";

        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM list_entries
             {FILTER_CLAUSE}
             ORDER BY {sort_column} {direction}{secondary}
             LIMIT $5 OFFSET $6"
        );
        let items = sqlx::query_as::<_, ListEntry>(&query)
            .bind(user_id)
            .bind(&filter.status)
            .bind(&filter.priority)
            .bind(&search)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM list_entries {FILTER_CLAUSE}");
        let (total,): (i64,) = sqlx::query_as(&count_query)
            .bind(user_id)
            .bind(&filter.status)
            .bind(&filter.priority)
            .bind(&search)
            .fetch_one(pool)
            .await?;

        Ok(Page {
            items,
            total,
            page,
            page_size,
        })
    }

    /// Summarize one user's list: counts per status, totals, most recent
    /// activity, and the average over scored entries only. A user with no
    /// entries gets the well-defined zero values of [`ListStats::empty`].
    pub async fn stats(pool: &PgPool, user_id: DbId) -> Result<ListStats, sqlx::Error> {
        let status_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*) FROM list_entries WHERE user_id = $1 GROUP BY status",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let (total_entries, total_progress, total_rewatch_count, last_activity_at, average_score, scored_entries): (
            i64,
            i64,
            i64,
            Option<Timestamp>,
            Option<f64>,
            i64,
        ) = sqlx::query_as(
            "SELECT COUNT(*),
                    COALESCE(SUM(progress), 0)::BIGINT,
                    COALESCE(SUM(rewatch_count), 0)::BIGINT,
                    MAX(updated_at),
                    AVG(score)::DOUBLE PRECISION,
                    COUNT(score)
             FROM list_entries WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        let status_counts: BTreeMap<String, i64> = status_rows.into_iter().collect();

        Ok(ListStats {
            status_counts,
            total_entries,
            total_progress,
            total_rewatch_count,
            last_activity_at,
            average_score,
            scored_entries,
        })
    }
}
