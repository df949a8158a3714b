//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// ```text
/// GET           /categories/        -> list (public)
/// POST          /categories/        -> create (auth)
/// GET, DELETE   /categories/{id}/   -> get, delete (auth, owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}/",
            get(categories::get_category).delete(categories::delete_category),
        )
}
