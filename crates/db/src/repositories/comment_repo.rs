//! Repository for the `comments` table.

use cinelog_core::pagination::{clamp_page, clamp_page_size, page_offset};
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, UpdateComment};
use crate::models::Page;

/// Column list for comments queries.
const COMMENT_COLUMNS: &str = "id, imdb_id, movie_id, user_id, author_name, \
    comment, rating, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List comments for a movie, newest first, paged.
    pub async fn list_by_imdb(
        pool: &PgPool,
        imdb_id: &str,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Comment>, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let query = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE imdb_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Comment>(&query)
            .bind(imdb_id)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM comments WHERE imdb_id = $1")
                .bind(imdb_id)
                .fetch_one(pool)
                .await?;

        Ok(Page {
            items,
            total,
            page,
            page_size,
        })
    }

    /// Find a comment by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        imdb_id: &str,
        movie_id: DbId,
        user_id: DbId,
        author_name: &str,
        comment: &str,
        rating: i32,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (imdb_id, movie_id, user_id, author_name, comment, rating)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(imdb_id)
            .bind(movie_id)
            .bind(user_id)
            .bind(author_name)
            .bind(comment)
            .bind(rating)
            .fetch_one(pool)
            .await
    }

    /// Update a comment's text and/or rating; absent fields are left
    /// untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET
                comment = COALESCE($1, comment),
                rating = COALESCE($2, rating),
                updated_at = now()
             WHERE id = $3
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.comment)
            .bind(input.rating)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
