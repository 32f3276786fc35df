use axum::routing::get;
use axum::Router;

use crate::handlers::community_top;
use crate::state::AppState;

/// `/community-top` routes: public read, admin-only replace.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(community_top::get_community_top).put(community_top::replace_community_top),
    )
}
