//! Handlers for the curated community top list.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use cinelog_core::community_top::{clamp_top_limit, MAX_TOP_LIMIT};
use cinelog_core::imdb::validate_imdb_id;
use cinelog_db::models::community_top::{CommunityTopItem, CommunityTopList, UpdateCommunityTop};
use cinelog_db::models::vote::VoteWithUser;
use cinelog_db::repositories::community_top_repo::ResolvedTopItem;
use cinelog_db::repositories::{CommunityTopRepo, MovieRepo, VoteRepo};

use crate::error::AppResult;
use crate::middleware::auth::OptionalAuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::CommunityTopParams;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /community-top
// ---------------------------------------------------------------------------

/// The curated list in its curated order. Admin callers additionally get
/// the raw votes for each listed movie; everyone else gets display data
/// only.
pub async fn get_community_top(
    OptionalAuthUser(user): OptionalAuthUser,
    State(state): State<AppState>,
    Query(params): Query<CommunityTopParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_top_limit(params.limit);
    let rows = CommunityTopRepo::get_items(&state.pool, limit).await?;
    let updated_at = CommunityTopRepo::last_updated_at(&state.pool).await?;

    let mut items: Vec<CommunityTopItem> = rows.into_iter().map(CommunityTopItem::from).collect();

    let is_admin = user.as_ref().is_some_and(|u| u.is_admin());
    let include_votes = is_admin && params.include_votes.unwrap_or(true);
    if include_votes && !items.is_empty() {
        let imdb_ids: Vec<String> = items.iter().map(|i| i.imdb_id.clone()).collect();
        let votes = VoteRepo::list_for_movies(&state.pool, &imdb_ids).await?;

        let mut by_movie: HashMap<String, Vec<VoteWithUser>> = HashMap::new();
        for vote in votes {
            by_movie.entry(vote.imdb_id.clone()).or_default().push(vote);
        }
        for item in &mut items {
            item.votes = Some(by_movie.remove(&item.imdb_id).unwrap_or_default());
        }
    }

    Ok(ApiResponse::ok(CommunityTopList { items, updated_at }))
}

// ---------------------------------------------------------------------------
// PUT /community-top
// ---------------------------------------------------------------------------

/// Replace the curated list wholesale (admin only). Item order in the
/// request becomes the curated order; each referenced movie is created on
/// the fly when absent.
pub async fn replace_community_top(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateCommunityTop>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let mut resolved = Vec::with_capacity(input.items.len());
    for item in &input.items {
        let imdb_id = validate_imdb_id(&item.imdb_id)?;
        let movie = MovieRepo::ensure(&state.pool, &imdb_id, admin.user_id).await?;
        resolved.push(ResolvedTopItem {
            imdb_id,
            notes: item.notes.clone().unwrap_or_default(),
            movie_id: movie.id,
        });
    }

    CommunityTopRepo::replace(&state.pool, &resolved, admin.user_id).await?;
    tracing::info!(items = resolved.len(), "Community top list replaced");

    let rows = CommunityTopRepo::get_items(&state.pool, MAX_TOP_LIMIT).await?;
    let updated_at = CommunityTopRepo::last_updated_at(&state.pool).await?;
    let items: Vec<CommunityTopItem> = rows.into_iter().map(CommunityTopItem::from).collect();
    Ok(ApiResponse::ok(CommunityTopList { items, updated_at }))
}
