//! Handlers for movie comments.
//!
//! Authors may edit or remove their own comments only within a fixed
//! window after creation; admins may delete any comment at any time.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use cinelog_core::comments::{validate_comment_text, within_edit_window};
use cinelog_core::error::CoreError;
use cinelog_core::imdb::validate_imdb_id;
use cinelog_core::profanity::has_profanity;
use cinelog_core::rating::validate_rating;
use cinelog_core::types::DbId;
use cinelog_db::models::comment::{Comment, CreateComment, UpdateComment};
use cinelog_db::repositories::{CommentRepo, MovieRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{message_response, ApiResponse};
use crate::state::AppState;

/// Fetch a comment or 404.
async fn comment_or_404(pool: &sqlx::PgPool, id: DbId) -> AppResult<Comment> {
    CommentRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Comment", id)))
}

// ---------------------------------------------------------------------------
// GET /comments/{imdbId}
// ---------------------------------------------------------------------------

/// List a movie's comments, newest first, paged.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let imdb_id = validate_imdb_id(&imdb_id)?;
    let page =
        CommentRepo::list_by_imdb(&state.pool, &imdb_id, params.page, params.page_size).await?;
    Ok(ApiResponse::ok(page))
}

// ---------------------------------------------------------------------------
// POST /comments
// ---------------------------------------------------------------------------

/// Post a comment on a movie. The movie row is created on the fly if this
/// is the first activity for that IMDb id.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let imdb_id = validate_imdb_id(&input.imdb_id)?;
    validate_comment_text(&input.comment)?;
    validate_rating(input.rating)?;

    if has_profanity(&input.comment) {
        return Err(AppError::BadRequest(
            "Comment contains inappropriate language".into(),
        ));
    }

    let author = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    let movie = MovieRepo::ensure(&state.pool, &imdb_id, auth.user_id).await?;
    let comment = CommentRepo::create(
        &state.pool,
        &imdb_id,
        movie.id,
        auth.user_id,
        &author.name,
        input.comment.trim(),
        input.rating,
    )
    .await?;

    tracing::info!(comment_id = comment.id, imdb_id = %imdb_id, "Comment created");
    Ok(ApiResponse::created(comment))
}

// ---------------------------------------------------------------------------
// PUT /comments/{id}
// ---------------------------------------------------------------------------

/// Edit a comment: author only, and only while the edit window is open.
pub async fn update_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let existing = comment_or_404(&state.pool, id).await?;
    if existing.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author may edit this comment".into(),
        )));
    }
    if !within_edit_window(existing.created_at, chrono::Utc::now()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "The edit window for this comment has closed".into(),
        )));
    }

    if let Some(text) = &input.comment {
        validate_comment_text(text)?;
        if has_profanity(text) {
            return Err(AppError::BadRequest(
                "Comment contains inappropriate language".into(),
            ));
        }
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let updated = CommentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Comment", id)))?;
    tracing::info!(comment_id = id, "Comment updated");
    Ok(ApiResponse::ok(updated))
}

// ---------------------------------------------------------------------------
// DELETE /comments/{id}
// ---------------------------------------------------------------------------

/// Remove a comment. The author may do so within the edit window; an admin
/// may do so at any time.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let existing = comment_or_404(&state.pool, id).await?;

    if !auth.is_admin() {
        if existing.user_id != auth.user_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only the author may remove this comment".into(),
            )));
        }
        if !within_edit_window(existing.created_at, chrono::Utc::now()) {
            return Err(AppError::Core(CoreError::Forbidden(
                "The edit window for this comment has closed".into(),
            )));
        }
    }

    CommentRepo::delete(&state.pool, id).await?;
    tracing::info!(comment_id = id, "Comment deleted");
    Ok(message_response(StatusCode::OK, "Comment deleted"))
}
