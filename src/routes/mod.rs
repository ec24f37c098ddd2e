//! Router assembly.

mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::handlers::common::not_found;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Enforced by the `Json` extractor, so an oversized
/// body surfaces as a rejection and gets the usual JSON error body.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Full application: common and user routes, JSON 404 fallback, request tracing and body limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(user_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
}
