//! Route definitions for the `/notes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// All routes require a Bearer access token.
///
/// ```text
/// GET, POST                 /notes/        -> list, create
/// GET, PUT, PATCH, DELETE   /notes/{id}/   -> get, replace, patch, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}/",
            get(notes::get_note)
                .put(notes::replace_note)
                .patch(notes::patch_note)
                .delete(notes::delete_note),
        )
}
