//! Token issuance behind a trait so the signing scheme can be swapped.
//!
//! Handlers and the [`AuthUser`](crate::middleware::auth::AuthUser) extractor
//! only ever talk to [`TokenIssuer`]; [`JwtIssuer`] is the HS256 implementation
//! wired up by the binary.

use jotter_core::types::DbId;
use serde::Serialize;

use super::jwt::{generate_token, validate_token, JwtConfig, TokenType};

/// The `{ access, refresh }` pair returned by login.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token is invalid or expired")]
    Invalid,

    #[error("Token has wrong type")]
    WrongType,

    #[error("Token could not be issued: {0}")]
    Issue(String),
}

/// Issues and verifies the tokens that authenticate API callers.
pub trait TokenIssuer: Send + Sync {
    /// Mint a short-lived access token for `user_id`.
    fn issue_access(&self, user_id: DbId) -> Result<String, TokenError>;

    /// Mint a long-lived refresh token for `user_id`.
    fn issue_refresh(&self, user_id: DbId) -> Result<String, TokenError>;

    /// Check a token's signature, expiry, and kind; return the user it was issued to.
    fn verify(&self, token: &str, expected: TokenType) -> Result<DbId, TokenError>;

    fn issue_pair(&self, user_id: DbId) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access: self.issue_access(user_id)?,
            refresh: self.issue_refresh(user_id)?,
        })
    }
}

/// HS256 JWT implementation of [`TokenIssuer`].
#[derive(Debug, Clone)]
pub struct JwtIssuer {
    config: JwtConfig,
}

impl JwtIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue_access(&self, user_id: DbId) -> Result<String, TokenError> {
        generate_token(user_id, TokenType::Access, &self.config)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    fn issue_refresh(&self, user_id: DbId) -> Result<String, TokenError> {
        generate_token(user_id, TokenType::Refresh, &self.config)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    fn verify(&self, token: &str, expected: TokenType) -> Result<DbId, TokenError> {
        let claims = validate_token(token, &self.config).map_err(|_| TokenError::Invalid)?;
        if claims.token_type != expected {
            return Err(TokenError::WrongType);
        }
        Ok(claims.sub)
    }
}
