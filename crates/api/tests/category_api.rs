//! HTTP-level integration tests for the `/categories` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, first_category_id, get, get_auth, post_json,
    post_json_auth, register_and_login,
};
use serde_json::json;
use sqlx::PgPool;

/// The list is public and spans every user's categories.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_public_and_unfiltered(pool: PgPool) {
    register_and_login(&pool, "alice").await;
    register_and_login(&pool, "bob").await;

    let response = get(build_test_app(pool), "/api/categories/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 6);

    let first = &items[0];
    assert!(first["id"].is_number());
    assert!(first["name"].is_string());
    assert!(first["color"].is_string());
    assert!(first.get("user_id").is_none());
    assert!(first.get("created_at").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_auth(pool: PgPool) {
    let body = json!({ "name": "Work", "color": "#123ABC" });
    let response = post_json(build_test_app(pool), "/api/categories/", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category(pool: PgPool) {
    let token = register_and_login(&pool, "maker").await;

    let body = json!({ "name": "Work", "color": "#123ABC" });
    let response = post_json_auth(build_test_app(pool.clone()), "/api/categories/", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["name"], "Work");
    assert_eq!(created["color"], "#123ABC");

    let uri = format!("/api/categories/{}/", created["id"]);
    let response = get_auth(build_test_app(pool), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_without_color_defaults_to_white(pool: PgPool) {
    let token = register_and_login(&pool, "plain").await;

    let body = json!({ "name": "Uncolored" });
    let response = post_json_auth(build_test_app(pool), "/api/categories/", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["color"], "#FFFFFF");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_invalid_payloads(pool: PgPool) {
    let token = register_and_login(&pool, "picky").await;

    let cases = [
        json!({ "name": "Bad", "color": "red" }),
        json!({ "name": "Bad", "color": "#12345" }),
        json!({ "name": "", "color": "#123456" }),
        json!({ "name": "x".repeat(256) }),
        json!({ "color": "#123456" }),
    ];

    for body in cases {
        let response =
            post_json_auth(build_test_app(pool.clone()), "/api/categories/", body.clone(), &token)
                .await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload {body} should be rejected"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_category_is_not_found(pool: PgPool) {
    register_and_login(&pool, "alice").await;
    let bob = register_and_login(&pool, "bob").await;
    let alice_cat = first_category_id(&pool, "alice").await;
    let uri = format!("/api/categories/{alice_cat}/");

    let response = get_auth(build_test_app(pool.clone()), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(build_test_app(pool.clone()), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
        .bind(alice_cat)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(exists);
}

/// Deleting a category removes the notes filed under it and nothing else.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cascades_to_notes(pool: PgPool) {
    let token = register_and_login(&pool, "pruner").await;
    let doomed = first_category_id(&pool, "pruner").await;
    let kept = doomed + 1;

    for (title, category) in [("a", doomed), ("b", doomed), ("c", kept)] {
        let body = json!({ "title": title, "content": "c", "category": category });
        let response =
            post_json_auth(build_test_app(pool.clone()), "/api/notes/", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let uri = format!("/api/categories/{doomed}/");
    let response = delete_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(build_test_app(pool), "/api/notes/", &token).await;
    let notes = body_json(response).await;
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "c");
    assert_eq!(notes[0]["category"], kept);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_category_requires_auth(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/categories/1/").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trims_name_and_rejects_nul(pool: PgPool) {
    let token = register_and_login(&pool, "namer").await;

    let body = json!({ "name": "  Work  " });
    let response = post_json_auth(build_test_app(pool.clone()), "/api/categories/", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "Work");

    let body = json!({ "name": "Wo\u{0}rk" });
    let response = post_json_auth(build_test_app(pool), "/api/categories/", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unparseable_category_id_is_not_found(pool: PgPool) {
    let token = register_and_login(&pool, "lost").await;

    let response = get_auth(build_test_app(pool), "/api/categories/abc/", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
