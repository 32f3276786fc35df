//! Handlers for the movie catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use cinelog_core::error::CoreError;
use cinelog_core::imdb::validate_imdb_id;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::{CreateMovie, UpdateMovie};
use cinelog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::{message_response, ApiResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /movies
// ---------------------------------------------------------------------------

/// List the catalog, newest first, paged.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = MovieRepo::list(&state.pool, params.page, params.page_size).await?;
    Ok(ApiResponse::ok(page))
}

// ---------------------------------------------------------------------------
// GET /movies/imdb/{imdbId}
// ---------------------------------------------------------------------------

/// Look a movie up by its IMDb id (case-insensitive).
pub async fn get_movie_by_imdb(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let imdb_id = validate_imdb_id(&imdb_id)?;
    let movie = MovieRepo::find_by_imdb_id(&state.pool, &imdb_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_key("Movie", imdb_id.as_str())))?;
    Ok(ApiResponse::ok(movie))
}

// ---------------------------------------------------------------------------
// POST /movies
// ---------------------------------------------------------------------------

/// Register a movie in the catalog. Duplicate IMDb ids are a 409.
pub async fn create_movie(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let imdb_id = validate_imdb_id(&input.imdb_id)?;

    let movie = MovieRepo::create(&state.pool, &imdb_id, auth.user_id, &input).await?;
    tracing::info!(movie_id = movie.id, imdb_id = %movie.imdb_id, "Movie created");
    Ok(ApiResponse::created(movie))
}

// ---------------------------------------------------------------------------
// PUT /movies/{id}
// ---------------------------------------------------------------------------

/// Update a movie's display fields (admin only).
pub async fn update_movie(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Movie", id)))?;
    tracing::info!(movie_id = movie.id, "Movie updated");
    Ok(ApiResponse::ok(movie))
}

// ---------------------------------------------------------------------------
// DELETE /movies/{id}
// ---------------------------------------------------------------------------

/// Remove a movie from the catalog (admin only).
pub async fn delete_movie(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Movie", id)));
    }
    tracing::info!(movie_id = id, "Movie deleted");
    Ok(message_response(StatusCode::OK, "Movie deleted"))
}
