//! Note model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use jotter_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
///
/// The owner is never serialized; clients only ever see their own notes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    #[serde(rename = "category")]
    pub category_id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a note. The owner is supplied separately.
#[derive(Debug)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    pub category_id: DbId,
}

/// DTO for updating a note. Only `Some` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
}

/// Query parameters for listing notes.
#[derive(Debug, Default, Deserialize)]
pub struct NoteListParams {
    pub category_id: Option<DbId>,
}
