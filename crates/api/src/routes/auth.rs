//! Route definitions for account and token endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Public routes (no token required).
///
/// ```text
/// POST /register/        -> register
/// POST /login/           -> login
/// POST /token/refresh/   -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register/", post(auth::register))
        .route("/login/", post(auth::login))
        .route("/token/refresh/", post(auth::refresh))
}
