//! Request extractors shared by the handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a Bearer access token.
//! - [`resource_id::ResourceId`] -- Numeric `{id}` path segment; unparseable ids are 404.
//! - [`validated_json::ValidatedJson`] -- JSON body that has passed `validator` checks.

pub mod auth;
pub mod resource_id;
pub mod validated_json;
