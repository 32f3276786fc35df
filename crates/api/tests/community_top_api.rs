//! HTTP-level integration tests for the curated community top list.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth, put_json_auth, register};
use sqlx::PgPool;

fn two_items() -> serde_json::Value {
    serde_json::json!({
        "items": [
            { "imdbId": "tt0000002", "notes": "community favourite" },
            { "imdbId": "tt0000001" },
        ]
    })
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

/// Only admins may replace the list; request order becomes curated order.
#[sqlx::test(migrations = "../db/migrations")]
async fn replace_is_admin_only_and_preserves_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (admin, _) = register(&app, "Admin", "admin@example.com", "password1").await;
    let (user, _) = register(&app, "User", "user@example.com", "password2").await;

    let response = put_json_auth(&app, "/api/v1/community-top", &user, two_items()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(&app, "/api/v1/community-top", &admin, two_items()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["imdbId"], "TT0000002");
    assert_eq!(items[0]["notes"], "community favourite");
    assert_eq!(items[1]["imdbId"], "TT0000001");
    assert!(json["data"]["updatedAt"].is_string());
}

/// A second PUT replaces the list wholesale rather than appending.
#[sqlx::test(migrations = "../db/migrations")]
async fn replace_is_wholesale(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (admin, _) = register(&app, "Admin", "admin@example.com", "password1").await;

    put_json_auth(&app, "/api/v1/community-top", &admin, two_items()).await;

    let body = serde_json::json!({ "items": [{ "imdbId": "tt0000003" }] });
    let response = put_json_auth(&app, "/api/v1/community-top", &admin, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["imdbId"], "TT0000003");
}

/// More than 50 items is rejected before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn replace_caps_item_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (admin, _) = register(&app, "Admin", "admin@example.com", "password1").await;

    let items: Vec<serde_json::Value> = (0..51)
        .map(|i| serde_json::json!({ "imdbId": format!("tt{i:07}") }))
        .collect();
    let body = serde_json::json!({ "items": items });

    let response = put_json_auth(&app, "/api/v1/community-top", &admin, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// Anonymous and regular callers get display data only; admins also get
/// the raw votes per listed movie.
#[sqlx::test(migrations = "../db/migrations")]
async fn votes_are_visible_to_admins_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (admin, _) = register(&app, "Admin", "admin@example.com", "password1").await;
    let (user, _) = register(&app, "User", "user@example.com", "password2").await;

    // A vote on a listed movie.
    let vote = serde_json::json!({ "imdbId": "tt0000001", "rating": 9 });
    let response = post_json_auth(&app, "/api/v1/votes", &user, vote).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    put_json_auth(&app, "/api/v1/community-top", &admin, two_items()).await;

    // Anonymous: no votes field at all.
    let response = get(&app, "/api/v1/community-top").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].get("votes").is_none());

    // Regular user: same as anonymous.
    let response = get_auth(&app, "/api/v1/community-top", &user).await;
    let json = body_json(response).await;
    assert!(json["data"]["items"][0].get("votes").is_none());

    // Admin: votes present, including the voter identity.
    let response = get_auth(&app, "/api/v1/community-top", &admin).await;
    let json = body_json(response).await;
    let items = json["data"]["items"].as_array().unwrap();
    let voted: &serde_json::Value = items
        .iter()
        .find(|i| i["imdbId"] == "TT0000001")
        .expect("listed movie must be present");
    assert_eq!(voted["votes"][0]["rating"], 9);
    assert_eq!(voted["votes"][0]["user"]["email"], "user@example.com");
}

/// An empty list reads as an empty payload, not an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn empty_list_reads_cleanly(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/api/v1/community-top").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["items"], serde_json::json!([]));
    assert!(json["data"]["updatedAt"].is_null());
}
