//! Common routes: service index and health.

use crate::handlers::common::{health, index};
use axum::{routing::get, Router};

/// GET / and GET /health. Neither touches the store.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
