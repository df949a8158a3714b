//! Handlers for registration, login, and access-token refresh.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::validation::{validate_no_nul, validate_not_blank};
use jotter_db::models::user::{CreateUser, UserResponse};
use jotter_db::repositories::{CategoryRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::TokenType;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::tokens::TokenPair;
use crate::error::{AppError, AppResult};
use crate::middleware::validated_json::ValidatedJson;
use crate::request::trimmed;
use crate::state::AppState;

/// Shared message for unknown email and wrong password, so login does not
/// reveal which accounts exist.
const BAD_CREDENTIALS: &str = "No active account found with the given credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register/`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150), custom(function = "validate_not_blank"))]
    pub username: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email, custom(function = "validate_no_nul"))]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Request body for `POST /login/`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_no_nul"))]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /token/refresh/`.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response body for `POST /token/refresh/`.
#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub access: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register/
///
/// Create an account and provision its default categories. Returns 201 with
/// the new user (never the password hash).
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            "username: A user with that username already exists".into(),
        )));
    }
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            "email: A user with that email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    // Provisioning failure leaves the account in place without defaults.
    match CategoryRepo::create_defaults(&state.pool, user.id, &state.config.default_categories)
        .await
    {
        Ok(categories) => tracing::info!(
            user_id = user.id,
            categories = categories.len(),
            "User registered"
        ),
        Err(e) => tracing::warn!(
            user_id = user.id,
            error = %e,
            "User registered but default categories could not be created"
        ),
    }

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// POST /api/login/
///
/// Authenticate with email + password. Returns `{ access, refresh }`.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenPair>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            BAD_CREDENTIALS.into(),
        )));
    }

    let pair = state.tokens.issue_pair(user.id)?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(pair))
}

/// POST /api/token/refresh/
///
/// Exchange a valid refresh token for a new access token.
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RefreshRequest>,
) -> AppResult<Json<AccessResponse>> {
    let user_id = state.tokens.verify(&input.refresh, TokenType::Refresh)?;

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let access = state.tokens.issue_access(user.id)?;

    Ok(Json(AccessResponse { access }))
}
