//! Category model.

use serde::Serialize;
use sqlx::FromRow;
use jotter_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
///
/// Serializes as `{ id, name, color }`; the owner and timestamp stay server-side.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
    #[serde(skip_serializing)]
    pub user_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// DTO for creating a category. A `None` color falls back to white.
#[derive(Debug)]
pub struct CreateCategory {
    pub name: String,
    pub color: Option<String>,
}
