//! Shared helpers for HTTP integration tests.
//!
//! Each test builds the real router (same middleware stack as production)
//! around a per-test database pool and drives it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jotter_core::defaults::DefaultCategories;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use jotter_api::auth::jwt::JwtConfig;
use jotter_api::auth::tokens::JwtIssuer;
use jotter_api::config::ServerConfig;
use jotter_api::router::build_app_router;
use jotter_api::state::AppState;

/// Password used by [`register_and_login`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        default_categories: DefaultCategories::builtin(),
    }
}

/// Build the full application router around `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        tokens: Arc::new(JwtIssuer::new(config.jwt.clone())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Send a raw (possibly malformed) body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register `username` (email `<username>@test.com`) through the API and
/// return the created user JSON.
pub async fn register(pool: &PgPool, username: &str) -> Value {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": TEST_PASSWORD,
    });
    let response = post_json(build_test_app(pool.clone()), "/api/register/", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Log in through the API and return `{ access, refresh }`.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(build_test_app(pool.clone()), "/api/login/", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Register a user and return its access token.
pub async fn register_and_login(pool: &PgPool, username: &str) -> String {
    register(pool, username).await;
    let tokens = login(pool, &format!("{username}@test.com"), TEST_PASSWORD).await;
    tokens["access"].as_str().unwrap().to_string()
}

/// Id of the caller's first category, in id order.
pub async fn first_category_id(pool: &PgPool, username: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "SELECT c.id FROM categories c JOIN users u ON u.id = c.user_id
         WHERE u.username = $1 ORDER BY c.id LIMIT 1",
    )
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}
