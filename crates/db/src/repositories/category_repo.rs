//! Repository for the `categories` table.

use sqlx::PgPool;
use jotter_core::defaults::DefaultCategories;
use jotter_core::types::DbId;
use jotter_core::validation::DEFAULT_CATEGORY_COLOR;

use crate::models::category::{Category, CreateCategory};

/// Column list for categories queries.
const COLUMNS: &str = "id, name, color, user_id, created_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category regardless of owner, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// List the categories owned by one user, ordered by ID.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE user_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID, whoever owns it.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by ID only if `user_id` owns it.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a category, returning the created row.
    ///
    /// A missing color becomes [`DEFAULT_CATEGORY_COLOR`].
    pub async fn create(
        pool: &PgPool,
        user_id: Option<DbId>,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.color.as_deref().unwrap_or(DEFAULT_CATEGORY_COLOR))
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Insert every configured default category for `user_id` in one statement.
    pub async fn create_defaults(
        pool: &PgPool,
        user_id: DbId,
        defaults: &DefaultCategories,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let (names, colors): (Vec<String>, Vec<String>) = defaults
            .entries()
            .iter()
            .map(|c| (c.name.clone(), c.color.clone()))
            .unzip();

        let query = format!(
            "INSERT INTO categories (name, color, user_id)
             SELECT name, color, $3
             FROM UNNEST($1::text[], $2::text[]) AS d(name, color)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Category>(&query)
            .bind(&names)
            .bind(&colors)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        tracing::debug!(user_id, count = created.len(), "Default categories inserted");
        Ok(created)
    }

    /// Delete a category owned by `user_id`. Cascades to its notes.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
