use axum::routing::get;
use axum::Router;

use crate::handlers::my_list;
use crate::state::AppState;

/// `/my-list` routes, all scoped to the authenticated caller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(my_list::list_entries).post(my_list::upsert_entry),
        )
        .route("/stats", get(my_list::get_stats))
        .route(
            "/{id}",
            get(my_list::get_entry)
                .put(my_list::update_entry)
                .delete(my_list::delete_entry),
        )
}
