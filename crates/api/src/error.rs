use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jotter_core::error::CoreError;
use serde_json::json;

use crate::auth::tokens::TokenError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `jotter_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A token could not be issued or verified.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A URL that names no resource, such as a non-numeric id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_code_message(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Token errors ---
            AppError::Token(TokenError::Issue(msg)) => {
                tracing::error!(error = %msg, "Token issuance failed");
                internal()
            }
            AppError::Token(err) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.to_string()),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.status_code_message();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations (error code 23503) map to 400.
/// - Untranslatable characters (error code 22021) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            // PostgreSQL unique constraint violation: error code 23505
            if code.as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            // A referenced row vanished between the existence check and the write.
            if code.as_deref() == Some("23503") {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Referenced object does not exist".to_string(),
                );
            }
            // A value the column type cannot hold, e.g. text containing NUL.
            if code.as_deref() == Some("22021") {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Value contains characters that cannot be stored".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::Core(CoreError::NotFound {
            entity: "Note",
            id: 5,
        });
        let (status, code, message) = err.status_code_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
        assert_eq!(message, "Note with id 5 not found");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Core(CoreError::Validation("title: required".into()));
        assert_eq!(err.status_code_message().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_errors_map_to_401_except_issuance() {
        assert_eq!(
            AppError::Token(TokenError::Invalid).status_code_message().0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Token(TokenError::WrongType).status_code_message().0,
            StatusCode::UNAUTHORIZED
        );
        let (status, _, message) =
            AppError::Token(TokenError::Issue("key".into())).status_code_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "An internal error occurred");
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code_message().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_message_is_sanitized() {
        let err = AppError::InternalError("secret stack trace".into());
        let (status, code, message) = err.status_code_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
        assert!(!message.contains("secret"));
    }
}
