//! Shared application state for all routes.

use sqlx::PgPool;

/// The pool is created once at startup and cloned (cheap handle) into each handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
