//! Shared helpers for router tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use std::time::Duration;
use user_service::{connect_pool, ensure_users_table, AppState, PoolSettings, ServiceConfig};

/// State whose pool points at a closed port; every store call fails.
pub fn unreachable_state() -> AppState {
    let config = ServiceConfig {
        db_host: "127.0.0.1".into(),
        db_port: 1,
        pool: PoolSettings {
            acquire_timeout: Duration::from_millis(500),
            ..PoolSettings::default()
        },
        ..ServiceConfig::default()
    };
    AppState::new(connect_pool(&config))
}

/// State backed by the database in `TEST_DATABASE_URL`, with `users` created.
pub async fn live_state() -> AppState {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = PgPool::connect(&url).await.expect("connect to test database");
    ensure_users_table(&pool).await.expect("create users table");
    AppState::new(pool)
}

/// Email that no other test run has used.
pub fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}-{nanos}@example.com")
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
