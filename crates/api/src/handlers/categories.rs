//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::types::DbId;
use jotter_core::validation::{validate_hex_color, validate_not_blank};
use jotter_db::models::category::{Category, CreateCategory};
use jotter_db::repositories::{CategoryRepo, NoteRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::resource_id::ResourceId;
use crate::middleware::validated_json::ValidatedJson;
use crate::request::trimmed;
use crate::state::AppState;

/// Request body for `POST /categories/`.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

/// GET /api/categories/
///
/// List every category in storage. Unlike notes this is not filtered by
/// owner and needs no token.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories/
///
/// Create a category owned by the caller.
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let create_dto = CreateCategory {
        name: input.name,
        color: input.color,
    };
    let category = CategoryRepo::create(&state.pool, Some(auth.user_id), &create_dto).await?;

    tracing::info!(
        user_id = auth.user_id,
        category_id = category.id,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id}/
///
/// Fetch one of the caller's categories.
pub async fn get_category(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    Ok(Json(category))
}

/// DELETE /api/categories/{id}/
///
/// Delete one of the caller's categories together with every note filed under it.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    if CategoryRepo::find_owned(&state.pool, id, auth.user_id)
        .await?
        .is_none()
    {
        return Err(category_not_found(id));
    }

    let notes_removed = NoteRepo::count_in_category(&state.pool, id).await?;

    if !CategoryRepo::delete_owned(&state.pool, id, auth.user_id).await? {
        return Err(category_not_found(id));
    }

    tracing::info!(
        user_id = auth.user_id,
        category_id = id,
        notes_removed,
        "Category deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

fn category_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}
