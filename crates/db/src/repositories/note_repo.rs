//! Repository for the `notes` table.
//!
//! Every read and write is scoped by the owning user; a note that belongs to
//! someone else is indistinguishable from one that does not exist.

use sqlx::PgPool;
use jotter_core::types::DbId;

use crate::models::note::{CreateNote, Note, NoteListParams, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, category_id, user_id, created_at";

/// Provides owner-scoped CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a note owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, category_id, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// List the notes owned by `user_id`, optionally restricted to one category.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        params: &NoteListParams,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE user_id = $1 AND ($2::BIGINT IS NULL OR category_id = $2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(params.category_id)
            .fetch_all(pool)
            .await
    }

    /// Find a note by ID only if `user_id` owns it.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a note owned by `user_id`. Only `Some` fields in `input` are applied.
    ///
    /// The owner is rewritten to `user_id` and `created_at` is left untouched.
    /// Returns `None` if the note does not exist or belongs to someone else.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                category_id = COALESCE($5, category_id),
                user_id = $2
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note owned by `user_id`. Returns `true` if a row was deleted.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the notes filed under a category, across all owners.
    pub async fn count_in_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
