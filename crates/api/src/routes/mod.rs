pub mod auth;
pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register/                 register (public)
/// /login/                    login (public)
/// /token/refresh/            refresh access token (public)
///
/// /notes/                    list, create (auth)
/// /notes/{id}/               get, replace, patch, delete (auth, owner only)
///
/// /categories/               list (public), create (auth)
/// /categories/{id}/          get, delete (auth, owner only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(notes::router())
        .merge(categories::router())
}
