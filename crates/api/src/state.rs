use std::sync::Arc;

use crate::auth::tokens::TokenIssuer;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: jotter_db::DbPool,
    /// Server configuration, including the default-category list.
    pub config: Arc<ServerConfig>,
    /// Issues and verifies access/refresh tokens.
    pub tokens: Arc<dyn TokenIssuer>,
}
