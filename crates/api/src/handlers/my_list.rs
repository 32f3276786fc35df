//! Handlers for the caller's personal watch list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use validator::Validate;

use cinelog_core::error::CoreError;
use cinelog_core::imdb::validate_imdb_id;
use cinelog_core::types::{DbId, Timestamp};
use cinelog_core::watchlist::{
    normalize_tags, validate_counter, validate_date_window, validate_priority, validate_score,
    validate_status,
};
use cinelog_db::models::list_entry::{
    CreateListEntry, ListEntry, ListEntryFilter, UpdateListEntry,
};
use cinelog_db::repositories::list_entry_repo::ListEntryPatch;
use cinelog_db::repositories::{ListEntryRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{message_response, ApiResponse};
use crate::state::AppState;

/// Upsert result: the entry plus whether this write created it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertOutcome {
    pub created: bool,
    pub entry: ListEntry,
}

/// Validate the vocabulary fields of a patch and normalize its tags.
#[allow(clippy::too_many_arguments)]
fn build_patch(
    status: Option<String>,
    score: Option<f64>,
    progress: Option<i32>,
    rewatch_count: Option<i32>,
    priority: Option<String>,
    started_at: Option<Timestamp>,
    finished_at: Option<Timestamp>,
    notes: Option<String>,
    tags: Option<Vec<String>>,
    is_hidden: Option<bool>,
) -> AppResult<ListEntryPatch> {
    if let Some(status) = &status {
        validate_status(status)?;
    }
    if let Some(priority) = &priority {
        validate_priority(priority)?;
    }
    if let Some(score) = score {
        validate_score(score)?;
    }
    if let Some(progress) = progress {
        validate_counter("progress", progress)?;
    }
    if let Some(rewatch_count) = rewatch_count {
        validate_counter("rewatchCount", rewatch_count)?;
    }
    let tags = match tags {
        Some(tags) => Some(normalize_tags(&tags)?),
        None => None,
    };

    Ok(ListEntryPatch {
        status,
        score,
        progress,
        rewatch_count,
        priority,
        started_at,
        finished_at,
        notes,
        tags,
        is_hidden,
    })
}

/// Enforce the date window over the merge of an existing entry and a patch:
/// a patch supplying only one endpoint is checked against the stored other
/// endpoint.
fn validate_merged_dates(existing: Option<&ListEntry>, patch: &ListEntryPatch) -> AppResult<()> {
    let started = patch
        .started_at
        .or(existing.and_then(|e| e.started_at));
    let finished = patch
        .finished_at
        .or(existing.and_then(|e| e.finished_at));
    validate_date_window(started, finished)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /my-list/stats
// ---------------------------------------------------------------------------

/// Summary statistics over the caller's list. Unscored entries never shift
/// the average; a user with no entries gets all-zero values.
pub async fn get_stats(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = ListEntryRepo::stats(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(stats))
}

// ---------------------------------------------------------------------------
// GET /my-list
// ---------------------------------------------------------------------------

/// The caller's list: filterable, sortable, paged.
pub async fn list_entries(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<ListEntryFilter>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &filter.status {
        validate_status(status)?;
    }
    if let Some(priority) = &filter.priority {
        validate_priority(priority)?;
    }

    let page = ListEntryRepo::list(&state.pool, auth.user_id, &filter).await?;
    Ok(ApiResponse::ok(page))
}

// ---------------------------------------------------------------------------
// POST /my-list
// ---------------------------------------------------------------------------

/// Create-or-update keyed by (caller, imdbId). The first write snapshots
/// the movie's display fields into the entry; every later write patches
/// only the supplied fields and refreshes that snapshot.
pub async fn upsert_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateListEntry>,
) -> AppResult<Response> {
    input.validate()?;
    let imdb_id = validate_imdb_id(&input.imdb_id)?;

    let patch = build_patch(
        input.status,
        input.score,
        input.progress,
        input.rewatch_count,
        input.priority,
        input.started_at,
        input.finished_at,
        input.notes,
        input.tags,
        input.is_hidden,
    )?;

    let movie = MovieRepo::ensure(&state.pool, &imdb_id, auth.user_id).await?;
    let existing = ListEntryRepo::find_by_user_and_imdb(&state.pool, auth.user_id, &imdb_id).await?;
    validate_merged_dates(existing.as_ref(), &patch)?;

    match existing {
        None => {
            let entry = ListEntryRepo::create(
                &state.pool,
                auth.user_id,
                &imdb_id,
                movie.id,
                &movie.title,
                &movie.poster_url,
                &movie.year,
                &patch,
            )
            .await?;
            tracing::info!(entry_id = entry.id, imdb_id = %imdb_id, "List entry created");
            let (status, body) = ApiResponse::created(UpsertOutcome {
                created: true,
                entry,
            });
            Ok((status, body).into_response())
        }
        Some(existing) => {
            let display = (movie.title.as_str(), movie.poster_url.as_str(), movie.year.as_str());
            let entry = ListEntryRepo::update(
                &state.pool,
                existing.id,
                auth.user_id,
                &patch,
                Some(display),
            )
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("ListEntry", existing.id)))?;
            tracing::info!(entry_id = entry.id, imdb_id = %imdb_id, "List entry updated");
            let (status, body) = ApiResponse::ok(UpsertOutcome {
                created: false,
                entry,
            });
            Ok((status, body).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// GET /my-list/{id}
// ---------------------------------------------------------------------------

/// A single entry, owner-scoped.
pub async fn get_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = ListEntryRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ListEntry", id)))?;
    Ok(ApiResponse::ok(entry))
}

// ---------------------------------------------------------------------------
// PUT /my-list/{id}
// ---------------------------------------------------------------------------

/// Patch an entry by id, owner-scoped; absent fields are left untouched.
pub async fn update_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateListEntry>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }

    let existing = ListEntryRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ListEntry", id)))?;

    let patch = build_patch(
        input.status,
        input.score,
        input.progress,
        input.rewatch_count,
        input.priority,
        input.started_at,
        input.finished_at,
        input.notes,
        input.tags,
        input.is_hidden,
    )?;
    validate_merged_dates(Some(&existing), &patch)?;

    let entry = ListEntryRepo::update(&state.pool, id, auth.user_id, &patch, None)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ListEntry", id)))?;
    tracing::info!(entry_id = id, "List entry updated");
    Ok(ApiResponse::ok(entry))
}

// ---------------------------------------------------------------------------
// DELETE /my-list/{id}
// ---------------------------------------------------------------------------

/// Remove an entry, owner-scoped.
pub async fn delete_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = ListEntryRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("ListEntry", id)));
    }
    tracing::info!(entry_id = id, "List entry deleted");
    Ok(message_response(StatusCode::OK, "List entry deleted"))
}
