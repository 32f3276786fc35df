//! HTTP-level integration tests for comments and the edit window.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth, register};
use sqlx::PgPool;

async fn post_comment(
    app: &axum::Router,
    token: &str,
    imdb_id: &str,
    text: &str,
) -> serde_json::Value {
    let body = serde_json::json!({ "imdbId": imdb_id, "comment": text, "rating": 8 });
    let response = post_json_auth(app, "/api/v1/comments", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Commenting creates the movie row on the fly and stamps the author name.
#[sqlx::test(migrations = "../db/migrations")]
async fn comment_creates_movie_and_snapshots_author(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _user) = register(&app, "Ada", "ada@example.com", "password1").await;

    let comment = post_comment(&app, &token, "tt0111161", "A quiet masterpiece.").await;
    assert_eq!(comment["authorName"], "Ada");
    assert_eq!(comment["imdbId"], "TT0111161");

    let response = get(&app, "/api/v1/comments/TT0111161").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
}

/// Profane text is rejected, case-insensitively.
#[sqlx::test(migrations = "../db/migrations")]
async fn profanity_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _user) = register(&app, "Ada", "ada@example.com", "password1").await;

    let body = serde_json::json!({
        "imdbId": "tt0111161",
        "comment": "This is absolute SHIT.",
        "rating": 1,
    });
    let response = post_json_auth(&app, "/api/v1/comments", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Comment contains inappropriate language");
}

/// Too-short comment text is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn short_comment_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _user) = register(&app, "Ada", "ada@example.com", "password1").await;

    let body = serde_json::json!({ "imdbId": "tt0111161", "comment": "ok", "rating": 5 });
    let response = post_json_auth(&app, "/api/v1/comments", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Edit window and ownership
// ---------------------------------------------------------------------------

/// Inside the edit window the author may edit; other users may not.
#[sqlx::test(migrations = "../db/migrations")]
async fn only_author_may_edit(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_admin, _) = register(&app, "Admin", "admin@example.com", "password1").await;
    let (alice, _) = register(&app, "Alice", "alice@example.com", "password2").await;
    let (bob, _) = register(&app, "Bob", "bob@example.com", "password3").await;

    let comment = post_comment(&app, &alice, "tt0111161", "First impressions.").await;
    let id = comment["id"].as_i64().unwrap();

    let patch = serde_json::json!({ "comment": "Second thoughts." });
    let response = put_json_auth(&app, &format!("/api/v1/comments/{id}"), &bob, patch.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(&app, &format!("/api/v1/comments/{id}"), &alice, patch).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["comment"], "Second thoughts.");
}

/// After the window closes the author can no longer edit or delete, but an
/// admin can still delete.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_may_delete_after_window_closes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (admin, _) = register(&app, "Admin", "admin@example.com", "password1").await;
    let (alice, _) = register(&app, "Alice", "alice@example.com", "password2").await;

    let comment = post_comment(&app, &alice, "tt0111161", "A fleeting thought.").await;
    let id = comment["id"].as_i64().unwrap();

    // Age the comment past the 10-minute window.
    sqlx::query("UPDATE comments SET created_at = created_at - INTERVAL '11 minutes' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let patch = serde_json::json!({ "comment": "Too late to change this." });
    let response = put_json_auth(&app, &format!("/api/v1/comments/{id}"), &alice, patch).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(&app, &format!("/api/v1/comments/{id}"), &alice).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(&app, &format!("/api/v1/comments/{id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
}
