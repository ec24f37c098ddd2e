//! Service index, liveness and fallback handlers.

use crate::error::ErrorBody;
use crate::response::{service_index, timestamp_now, HealthBody};
use axum::{http::StatusCode, Json};

pub async fn index() -> Json<serde_json::Value> {
    Json(service_index())
}

/// Always 200 while the process runs; the store is not probed.
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "OK",
        timestamp: timestamp_now(),
    })
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".into(),
        }),
    )
}
