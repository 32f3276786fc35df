use axum::routing::{get, post};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// `/comments` routes.
///
/// The single path parameter is an IMDb id for GET (listing a movie's
/// comments) and a numeric comment id for PUT/DELETE.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(comments::create_comment)).route(
        "/{id}",
        get(comments::list_comments)
            .put(comments::update_comment)
            .delete(comments::delete_comment),
    )
}
