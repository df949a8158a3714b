//! Path extractor for the numeric `{id}` segment of resource URLs.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use jotter_core::types::DbId;

use crate::error::AppError;

/// The `{id}` of `/notes/{id}/` or `/categories/{id}/`.
///
/// An id that does not parse as a [`DbId`] (`abc`, or a number out of range)
/// names no resource, so it answers 404 in the usual JSON error shape.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub DbId);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ResourceId(id)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                tracing::debug!(error = %e.body_text(), "Unparseable resource id");
                Err(AppError::NotFound("No resource matches the given id".into()))
            }
            Err(other) => Err(AppError::InternalError(other.body_text())),
        }
    }
}
