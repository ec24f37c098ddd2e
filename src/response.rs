//! Small JSON bodies shared by handlers.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> MessageBody {
    MessageBody {
        message: text.into(),
    }
}

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub timestamp: String,
}

/// Current UTC time as RFC 3339 with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Service metadata and endpoint directory returned by `GET /`.
pub fn service_index() -> serde_json::Value {
    serde_json::json!({
        "message": "User Management Microservice API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "users": {
                "list": "GET /users",
                "create": "POST /users",
                "get": "GET /users/:id",
                "update": "PUT /users/:id",
                "delete": "DELETE /users/:id"
            }
        },
        "timestamp": timestamp_now()
    })
}
