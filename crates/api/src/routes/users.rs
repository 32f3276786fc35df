use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// `/users` routes: the caller's own account.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(users::get_me)
                .put(users::update_me)
                .delete(users::delete_me),
        )
        .route("/me/password", put(users::change_password))
}
