use axum::routing::{get, put};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// `/favorites` routes, all scoped to the authenticated caller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list_favorites).post(favorites::create_favorite),
        )
        .route(
            "/{imdbId}",
            put(favorites::update_favorite).delete(favorites::delete_favorite),
        )
}
