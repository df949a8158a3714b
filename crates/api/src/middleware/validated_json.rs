//! JSON body extractor that runs `validator` rules before the handler sees it.

use axum::extract::{FromRequest, Request};
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::validation::describe_errors;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// A deserialized and validated JSON request body.
///
/// Malformed JSON, missing fields, and wrong types are rejected with 400
/// `BAD_REQUEST`; rule violations with 400 `VALIDATION_ERROR`.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateThing>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(describe_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
