//! Repository for the `users` table.

use cinelog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::user::{UpdateProfile, User};

/// Column list for users queries.
const USER_COLUMNS: &str = "id, name, email, password_hash, role, is_active, \
    last_login_at, created_at, updated_at";

/// Provides CRUD operations for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Create a new user, returning the created row.
    ///
    /// Violates `uq_users_email` if the email is already registered.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email (emails are stored lowercase).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of registered users. The first account becomes admin.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update name and/or email; absent fields are left untouched.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($1, name),
                email = COALESCE($2, email),
                updated_at = now()
             WHERE id = $3
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a user's password hash.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET password_hash = $1, updated_at = now()
             WHERE id = $2
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(password_hash)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Stamp the last successful login time.
    pub async fn set_last_login(
        pool: &PgPool,
        id: DbId,
        at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = $1 WHERE id = $2")
            .bind(at)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a user. Votes, comments, favorites, and list entries are
    /// removed by the FK cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
