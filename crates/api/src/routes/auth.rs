use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// `/auth` routes: registration and login, both public.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}
