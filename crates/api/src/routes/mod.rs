//! Route tree, one module per resource.

pub mod auth;
pub mod comments;
pub mod community_top;
pub mod favorites;
pub mod health;
pub mod movies;
pub mod my_list;
pub mod users;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public; first account is admin)
/// /auth/login                    login (public)
///
/// /users/me                      get, update, delete (auth required)
/// /users/me/password             change password (auth required)
///
/// /movies                        list (public), create (auth required)
/// /movies/imdb/{imdbId}          get by IMDb id (public)
/// /movies/{id}                   update, delete (admin only)
///
/// /comments/{imdbId}             list (public)
/// /comments                      create (auth required)
/// /comments/{id}                 update, delete (author in window; admin delete)
///
/// /votes/ranking                 popularity ranking (public)
/// /votes/ranking/{imdbId}        single-movie ranking entry (public)
/// /votes                         cast or replace a vote (auth required)
/// /votes/me                      caller's votes (auth required)
/// /votes/{id}                    get, update (owner), delete (owner or admin)
///
/// /favorites                     list, add (auth required)
/// /favorites/{imdbId}            update notes, remove (auth required)
///
/// /community-top                 get (public; votes included for admins),
///                                replace (admin only)
///
/// /my-list                       list, upsert by imdbId (auth required)
/// /my-list/stats                 summary statistics (auth required)
/// /my-list/{id}                  get, update, delete (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/movies", movies::router())
        .nest("/comments", comments::router())
        .nest("/votes", votes::router())
        .nest("/favorites", favorites::router())
        .nest("/community-top", community_top::router())
        .nest("/my-list", my_list::router())
}
