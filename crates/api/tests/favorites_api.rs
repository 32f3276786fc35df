//! HTTP-level integration tests for favorites.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth, register};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn favorite_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _user) = register(&app, "Ada", "ada@example.com", "password1").await;

    // Add. The movie row is created on the fly.
    let body = serde_json::json!({ "imdbId": "tt0111161", "notes": "rewatch soon" });
    let response = post_json_auth(&app, "/api/v1/favorites", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["imdbId"], "TT0111161");
    assert_eq!(json["data"]["notes"], "rewatch soon");

    // List.
    let response = get_auth(&app, "/api/v1/favorites", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);

    // Update notes via the IMDb id.
    let body = serde_json::json!({ "notes": "seen again, still great" });
    let response = put_json_auth(&app, "/api/v1/favorites/tt0111161", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["notes"], "seen again, still great");

    // Remove.
    let response = delete_auth(&app, "/api/v1/favorites/tt0111161", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(&app, "/api/v1/favorites/tt0111161", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Favoriting the same movie twice is a 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_favorite_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _user) = register(&app, "Ada", "ada@example.com", "password1").await;

    let body = serde_json::json!({ "imdbId": "tt0111161" });
    let response = post_json_auth(&app, "/api/v1/favorites", &token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(&app, "/api/v1/favorites", &token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Favorites are private to their owner.
#[sqlx::test(migrations = "../db/migrations")]
async fn favorites_are_per_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (alice, _) = register(&app, "Alice", "alice@example.com", "password1").await;
    let (bob, _) = register(&app, "Bob", "bob@example.com", "password2").await;

    let body = serde_json::json!({ "imdbId": "tt0111161" });
    post_json_auth(&app, "/api/v1/favorites", &alice, body).await;

    let response = get_auth(&app, "/api/v1/favorites", &bob).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 0);
}
