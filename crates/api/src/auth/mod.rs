//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT generation and validation for access and refresh tokens.
//! - [`tokens`] -- The [`tokens::TokenIssuer`] seam handlers and extractors go through.

pub mod jwt;
pub mod password;
pub mod tokens;
