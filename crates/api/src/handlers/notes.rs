//! Handlers for the `/notes` resource.
//!
//! Every handler is scoped to the authenticated caller: notes are created
//! for the caller, listed for the caller, and a note owned by anyone else
//! answers 404 exactly like a missing one.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::types::DbId;
use jotter_core::validation::validate_not_blank;
use jotter_db::models::note::{CreateNote, Note, NoteListParams, UpdateNote};
use jotter_db::repositories::{CategoryRepo, NoteRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::resource_id::ResourceId;
use crate::middleware::validated_json::ValidatedJson;
use crate::request::{non_null, non_null_trimmed, trimmed};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Full note body for `POST /notes/` and `PUT /notes/{id}/`.
///
/// Any `user` or `created_at` in the payload is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct NoteRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    pub title: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,
    pub category: DbId,
}

/// Partial note body for `PATCH /notes/{id}/`.
///
/// Omitted fields are left unchanged; an explicit `null` is rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct PatchNoteRequest {
    #[serde(default, deserialize_with = "non_null_trimmed")]
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null_trimmed")]
    #[validate(custom(function = "validate_not_blank"))]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub category: Option<DbId>,
}

impl From<NoteRequest> for UpdateNote {
    fn from(input: NoteRequest) -> Self {
        Self {
            title: Some(input.title),
            content: Some(input.content),
            category_id: Some(input.category),
        }
    }
}

impl From<PatchNoteRequest> for UpdateNote {
    fn from(input: PatchNoteRequest) -> Self {
        Self {
            title: input.title,
            content: input.content,
            category_id: input.category,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/notes/?category_id=
///
/// List the caller's notes, optionally restricted to one category.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NoteListParams>,
) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list_for_user(&state.pool, auth.user_id, &params).await?;
    Ok(Json(notes))
}

/// POST /api/notes/
///
/// Create a note owned by the caller.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NoteRequest>,
) -> AppResult<(StatusCode, Json<Note>)> {
    ensure_category_exists(&state, input.category).await?;

    let create_dto = CreateNote {
        title: input.title,
        content: input.content,
        category_id: input.category,
    };
    let note = NoteRepo::create(&state.pool, auth.user_id, &create_dto).await?;

    tracing::info!(
        user_id = auth.user_id,
        note_id = note.id,
        category_id = note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/notes/{id}/
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| note_not_found(id))?;

    Ok(Json(note))
}

/// PUT /api/notes/{id}/
///
/// Replace title, content, and category. `created_at` is preserved.
pub async fn replace_note(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<NoteRequest>,
) -> AppResult<Json<Note>> {
    apply_update(&state, &auth, id, input.into()).await.map(Json)
}

/// PATCH /api/notes/{id}/
///
/// Update any subset of title, content, and category.
pub async fn patch_note(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<PatchNoteRequest>,
) -> AppResult<Json<Note>> {
    apply_update(&state, &auth, id, input.into()).await.map(Json)
}

/// DELETE /api/notes/{id}/
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete_owned(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(note_not_found(id));
    }

    tracing::info!(user_id = auth.user_id, note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn apply_update(
    state: &AppState,
    auth: &AuthUser,
    id: DbId,
    update: UpdateNote,
) -> AppResult<Note> {
    // Ownership is checked before the category so a foreign note is always 404.
    if NoteRepo::find_owned(&state.pool, id, auth.user_id)
        .await?
        .is_none()
    {
        return Err(note_not_found(id));
    }

    if let Some(category_id) = update.category_id {
        ensure_category_exists(state, category_id).await?;
    }

    let note = NoteRepo::update_owned(&state.pool, id, auth.user_id, &update)
        .await?
        .ok_or_else(|| note_not_found(id))?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note updated");

    Ok(note)
}

/// Any existing category is accepted, including one owned by another user.
async fn ensure_category_exists(state: &AppState, category_id: DbId) -> AppResult<()> {
    if CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "category: Invalid pk \"{category_id}\" - object does not exist"
        ))));
    }
    Ok(())
}

fn note_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}
