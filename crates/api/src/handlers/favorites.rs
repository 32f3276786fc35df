//! Handlers for per-user favorites.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use cinelog_core::error::CoreError;
use cinelog_core::imdb::validate_imdb_id;
use cinelog_db::models::favorite::{CreateFavorite, UpdateFavorite};
use cinelog_db::repositories::{FavoriteRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{message_response, ApiResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /favorites
// ---------------------------------------------------------------------------

/// The caller's favorites, newest first, paged.
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page =
        FavoriteRepo::list_by_user(&state.pool, auth.user_id, params.page, params.page_size)
            .await?;
    Ok(ApiResponse::ok(page))
}

// ---------------------------------------------------------------------------
// POST /favorites
// ---------------------------------------------------------------------------

/// Add a movie to the caller's favorites. Favoriting the same movie twice
/// is a 409 via `uq_favorites_user_imdb`.
pub async fn create_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let imdb_id = validate_imdb_id(&input.imdb_id)?;

    let movie = MovieRepo::ensure(&state.pool, &imdb_id, auth.user_id).await?;
    let favorite = FavoriteRepo::create(
        &state.pool,
        auth.user_id,
        &imdb_id,
        movie.id,
        input.notes.as_deref().unwrap_or(""),
    )
    .await?;

    tracing::info!(favorite_id = favorite.id, imdb_id = %imdb_id, "Favorite added");
    Ok(ApiResponse::created(favorite))
}

// ---------------------------------------------------------------------------
// PUT /favorites/{imdbId}
// ---------------------------------------------------------------------------

/// Replace the notes on one of the caller's favorites.
pub async fn update_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
    Json(input): Json<UpdateFavorite>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let imdb_id = validate_imdb_id(&imdb_id)?;

    let existing = FavoriteRepo::find_by_user_and_imdb(&state.pool, auth.user_id, &imdb_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_key("Favorite", imdb_id.as_str())))?;

    let notes = input.notes.unwrap_or(existing.notes);
    let updated = FavoriteRepo::update_notes(&state.pool, existing.id, &notes)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_key("Favorite", imdb_id.as_str())))?;

    Ok(ApiResponse::ok(updated))
}

// ---------------------------------------------------------------------------
// DELETE /favorites/{imdbId}
// ---------------------------------------------------------------------------

/// Remove a movie from the caller's favorites.
pub async fn delete_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Response> {
    let imdb_id = validate_imdb_id(&imdb_id)?;

    let deleted =
        FavoriteRepo::delete_by_user_and_imdb(&state.pool, auth.user_id, &imdb_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found_key(
            "Favorite",
            imdb_id.as_str(),
        )));
    }
    tracing::info!(imdb_id = %imdb_id, "Favorite removed");
    Ok(message_response(StatusCode::OK, "Favorite removed"))
}
