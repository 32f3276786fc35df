//! Handlers for votes and the popularity ranking.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use cinelog_core::error::CoreError;
use cinelog_core::imdb::validate_imdb_id;
use cinelog_core::rating::validate_rating;
use cinelog_core::types::DbId;
use cinelog_db::models::vote::{UpdateVote, UpsertVote, Vote};
use cinelog_db::repositories::{MovieRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{PageParams, RankingParams};
use crate::response::{message_response, ApiResponse};
use crate::state::AppState;

/// Fetch a vote or 404.
async fn vote_or_404(pool: &sqlx::PgPool, id: DbId) -> AppResult<Vote> {
    VoteRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Vote", id)))
}

// ---------------------------------------------------------------------------
// GET /votes/ranking
// ---------------------------------------------------------------------------

/// Movies ranked by average rating, vote count, and recency of the last
/// vote. Public.
pub async fn get_ranking(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> AppResult<impl IntoResponse> {
    let entries = VoteRepo::ranking(&state.pool, params.limit).await?;
    Ok(ApiResponse::ok(entries))
}

// ---------------------------------------------------------------------------
// GET /votes/ranking/{imdbId}
// ---------------------------------------------------------------------------

/// The ranking entry for one movie. A movie nobody has voted on yields the
/// zero entry rather than a 404.
pub async fn get_movie_ranking(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let imdb_id = validate_imdb_id(&imdb_id)?;
    let entry = VoteRepo::ranking_for_movie(&state.pool, &imdb_id).await?;
    Ok(ApiResponse::ok(entry))
}

// ---------------------------------------------------------------------------
// POST /votes
// ---------------------------------------------------------------------------

/// Cast or replace the caller's rating for a movie. The movie row is
/// created on the fly when absent.
pub async fn upsert_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertVote>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let imdb_id = validate_imdb_id(&input.imdb_id)?;
    validate_rating(input.rating)?;

    let movie = MovieRepo::ensure(&state.pool, &imdb_id, auth.user_id).await?;
    let vote = VoteRepo::upsert(&state.pool, &imdb_id, movie.id, auth.user_id, input.rating).await?;

    tracing::info!(vote_id = vote.id, imdb_id = %imdb_id, rating = vote.rating, "Vote recorded");
    Ok(ApiResponse::created(vote))
}

// ---------------------------------------------------------------------------
// GET /votes/me
// ---------------------------------------------------------------------------

/// The caller's own votes, most recently updated first, paged.
pub async fn list_my_votes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page =
        VoteRepo::list_for_user(&state.pool, auth.user_id, params.page, params.page_size).await?;
    Ok(ApiResponse::ok(page))
}

// ---------------------------------------------------------------------------
// GET /votes/{id}
// ---------------------------------------------------------------------------

/// A single vote, visible to its owner only.
pub async fn get_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let vote = vote_or_404(&state.pool, id).await?;
    if vote.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "This vote belongs to another user".into(),
        )));
    }
    Ok(ApiResponse::ok(vote))
}

// ---------------------------------------------------------------------------
// PUT /votes/{id}
// ---------------------------------------------------------------------------

/// Replace the rating of an existing vote (owner only).
pub async fn update_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVote>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_rating(input.rating)?;

    let existing = vote_or_404(&state.pool, id).await?;
    if existing.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "This vote belongs to another user".into(),
        )));
    }

    let vote = VoteRepo::upsert(
        &state.pool,
        &existing.imdb_id,
        existing.movie_id,
        auth.user_id,
        input.rating,
    )
    .await?;
    tracing::info!(vote_id = vote.id, rating = vote.rating, "Vote updated");
    Ok(ApiResponse::ok(vote))
}

// ---------------------------------------------------------------------------
// DELETE /votes/{id}
// ---------------------------------------------------------------------------

/// Withdraw a vote. Owners may delete their own; admins may delete any.
pub async fn delete_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let existing = vote_or_404(&state.pool, id).await?;
    if existing.user_id != auth.user_id && !auth.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "This vote belongs to another user".into(),
        )));
    }

    VoteRepo::delete(&state.pool, id).await?;
    tracing::info!(vote_id = id, "Vote deleted");
    Ok(message_response(StatusCode::OK, "Vote deleted"))
}
