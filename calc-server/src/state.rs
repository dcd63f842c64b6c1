//! Shared application state for request handlers.

use calc_auth::TokenService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// State handed to every handler. The pool is the only shared mutable
/// state; the token service is immutable after construction.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
}
