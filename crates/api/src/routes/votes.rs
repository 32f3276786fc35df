use axum::routing::{get, post};
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// `/votes` routes: the ranking (public) and vote CRUD (authenticated).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(votes::upsert_vote))
        .route("/ranking", get(votes::get_ranking))
        .route("/ranking/{imdbId}", get(votes::get_movie_ranking))
        .route("/me", get(votes::list_my_votes))
        .route(
            "/{id}",
            get(votes::get_vote)
                .put(votes::update_vote)
                .delete(votes::delete_vote),
        )
}
