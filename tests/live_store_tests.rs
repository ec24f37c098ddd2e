//! Round trips against a live PostgreSQL: create/read/update/delete, duplicate
//! emails, list order and the `updated_at` refresh.
//!
//! Every test here is `#[ignore]`d, so a plain `cargo test` skips them. Run with
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.
mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, empty_request, json_request, live_state, unique_email};
use serde_json::json;
use tower::util::ServiceExt;
use user_service::{app, AppState};

async fn create_user(state: &AppState, name: &str, email: &str) -> (StatusCode, serde_json::Value) {
    let response = app(state.clone())
        .oneshot(json_request(
            Method::POST,
            "/users",
            &json!({"name": name, "email": email}),
        ))
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn create_read_update_delete_lifecycle() {
    let state = live_state().await;
    let email = unique_email("alice");

    let (status, created) = create_user(&state, "Alice", &email).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["email"], email.as_str());
    assert_eq!(created["created_at"], created["updated_at"]);

    let uri = format!("/users/{id}");
    let response = app(state.clone())
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let response = app(state.clone())
        .oneshot(json_request(
            Method::PUT,
            &uri,
            &json!({"name": "Alice B", "email": email}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Alice B");
    assert_eq!(updated["created_at"], created["created_at"]);
    let before: chrono::NaiveDateTime = serde_json::from_value(created["updated_at"].clone()).unwrap();
    let after: chrono::NaiveDateTime = serde_json::from_value(updated["updated_at"].clone()).unwrap();
    assert!(after > before);

    let response = app(state.clone())
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "User deleted successfully");

    let response = app(state.clone())
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn whitespace_padded_id_finds_the_row() {
    let state = live_state().await;
    let (_, created) = create_user(&state, "Pad", &unique_email("pad")).await;
    let uri = format!("/users/%20{}", created["id"]);
    let response = app(state.clone())
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], created["id"]);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn numeric_name_is_stored_as_text() {
    let state = live_state().await;
    let response = app(state.clone())
        .oneshot(json_request(
            Method::POST,
            "/users",
            &json!({"name": 5, "email": unique_email("numeric")}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "5");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn missing_ids_are_not_found() {
    let state = live_state().await;
    let uri = format!("/users/{}", i32::MAX);
    for request in [
        empty_request(Method::GET, &uri),
        empty_request(Method::DELETE, &uri),
        json_request(Method::PUT, &uri, &json!({"name": "N", "email": unique_email("ghost")})),
    ] {
        let response = app(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn sequential_duplicate_email_conflicts() {
    let state = live_state().await;
    let email = unique_email("dup");
    let (first, _) = create_user(&state, "One", &email).await;
    let (second, body) = create_user(&state, "Two", &email).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn concurrent_duplicate_email_has_one_winner() {
    let state = live_state().await;
    let email = unique_email("race");
    let (a, b) = tokio::join!(
        create_user(&state, "A", &email),
        create_user(&state, "B", &email)
    );
    let mut statuses = vec![a.0, b.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn update_to_taken_email_conflicts() {
    let state = live_state().await;
    let taken = unique_email("taken");
    let (_, _) = create_user(&state, "Owner", &taken).await;
    let (_, other) = create_user(&state, "Other", &unique_email("other")).await;
    let uri = format!("/users/{}", other["id"]);
    let response = app(state.clone())
        .oneshot(json_request(Method::PUT, &uri, &json!({"name": "Other", "email": taken})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn list_is_newest_first() {
    let state = live_state().await;
    let (_, older) = create_user(&state, "Older", &unique_email("older")).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let (_, newer) = create_user(&state, "Newer", &unique_email("newer")).await;

    let response = app(state.clone())
        .oneshot(empty_request(Method::GET, "/users"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    let ids: Vec<&serde_json::Value> = users.as_array().unwrap().iter().map(|u| &u["id"]).collect();
    let newer_pos = ids.iter().position(|id| **id == newer["id"]).unwrap();
    let older_pos = ids.iter().position(|id| **id == older["id"]).unwrap();
    assert!(newer_pos < older_pos);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn initializer_is_idempotent() {
    let state = live_state().await;
    user_service::initialize_store(&state.pool, 1).await.unwrap();
    user_service::ensure_users_table(&state.pool).await.unwrap();
}
