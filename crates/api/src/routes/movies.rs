use axum::routing::{get, put};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// `/movies` routes: the shared catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/imdb/{imdbId}", get(movies::get_movie_by_imdb))
        .route(
            "/{id}",
            put(movies::update_movie).delete(movies::delete_movie),
        )
}
