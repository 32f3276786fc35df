//! Repository for the `movies` table.
//!
//! IMDb ids are normalized (uppercase) by the callers before they reach
//! this module; every query binds them as-is.

use cinelog_core::pagination::{clamp_page, clamp_page_size, page_offset};
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::models::Page;

/// Column list for movies queries.
const MOVIE_COLUMNS: &str = "id, imdb_id, title, poster_url, year, synopsis, \
    created_by, created_at, updated_at";

/// Provides CRUD operations for the movie catalog.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies, newest first, paged.
    pub async fn list(
        pool: &PgPool,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Movie>, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let query = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Movie>(&query)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await?;

        Ok(Page {
            items,
            total,
            page,
            page_size,
        })
    }

    /// Find a movie by its IMDb id.
    pub async fn find_by_imdb_id(
        pool: &PgPool,
        imdb_id: &str,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE imdb_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(imdb_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new movie, returning the created row.
    ///
    /// Violates `uq_movies_imdb_id` if the IMDb id is already registered.
    pub async fn create(
        pool: &PgPool,
        imdb_id: &str,
        created_by: DbId,
        input: &CreateMovie,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (imdb_id, title, poster_url, year, synopsis, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {MOVIE_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(imdb_id)
            .bind(&input.title)
            .bind(input.poster_url.as_deref().unwrap_or(""))
            .bind(input.year.as_deref().unwrap_or(""))
            .bind(input.synopsis.as_deref().unwrap_or(""))
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Update a movie's display fields; absent fields are left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($1, title),
                poster_url = COALESCE($2, poster_url),
                year = COALESCE($3, year),
                synopsis = COALESCE($4, synopsis),
                updated_at = now()
             WHERE id = $5
             RETURNING {MOVIE_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.poster_url)
            .bind(&input.year)
            .bind(&input.synopsis)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert-if-absent by IMDb id, returning the (existing or new) row.
    ///
    /// The no-op `DO UPDATE` makes the statement return the existing row
    /// without touching its data, so votes, favorites, and list entries can
    /// reference movies that were never explicitly registered.
    pub async fn ensure(
        pool: &PgPool,
        imdb_id: &str,
        created_by: DbId,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (imdb_id, title, created_by)
             VALUES ($1, $1, $2)
             ON CONFLICT (imdb_id) DO UPDATE SET imdb_id = EXCLUDED.imdb_id
             RETURNING {MOVIE_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(imdb_id)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }
}
