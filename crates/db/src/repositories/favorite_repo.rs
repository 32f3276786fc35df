//! Repository for the `favorites` table.

use cinelog_core::pagination::{clamp_page, clamp_page_size, page_offset};
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::Favorite;
use crate::models::Page;

/// Column list for favorites queries.
const FAVORITE_COLUMNS: &str = "id, imdb_id, movie_id, user_id, notes, created_at, updated_at";

/// Provides CRUD operations for per-user favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// List one user's favorites, newest first, paged.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Favorite>, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let query = format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM favorites WHERE user_id = $1")
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

    /// Find one user's favorite for a movie.
    pub async fn find_by_user_and_imdb(
        pool: &PgPool,
        user_id: DbId,
        imdb_id: &str,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites
             WHERE user_id = $1 AND imdb_id = $2"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(imdb_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a favorite, returning the created row.
    ///
    /// Violates `uq_favorites_user_imdb` if the movie is already favorited.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        imdb_id: &str,
        movie_id: DbId,
        notes: &str,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, imdb_id, movie_id, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {FAVORITE_COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(imdb_id)
            .bind(movie_id)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Replace the notes of a favorite.
    pub async fn update_notes(
        pool: &PgPool,
        id: DbId,
        notes: &str,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "UPDATE favorites SET notes = $1, updated_at = now()
             WHERE id = $2
             RETURNING {FAVORITE_COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(notes)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete one user's favorite for a movie.
    pub async fn delete_by_user_and_imdb(
        pool: &PgPool,
        user_id: DbId,
        imdb_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND imdb_id = $2")
            .bind(user_id)
            .bind(imdb_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
