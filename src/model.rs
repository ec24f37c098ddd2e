//! The `users` row and the create/update payload.

use crate::error::AppError;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

/// One row of `users`. Timestamps are `TIMESTAMP` (no zone) in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated body of `POST /users` and `PUT /users/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

impl UserInput {
    /// Both `name` and `email` must be present and truthy. Strings are kept as sent
    /// (no trimming, no email format check); non-zero numbers and `true` are stored
    /// as their text form, the way the column would cast them.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let name = required_text(body, "name");
        let email = required_text(body, "email");
        match (name, email) {
            (Some(name), Some(email)) => Ok(UserInput { name, email }),
            _ => Err(AppError::missing_fields()),
        }
    }
}

/// `None` for absent, `null`, `false`, `0`, `""`, and for arrays or objects.
fn required_text(body: &Value, field: &str) -> Option<String> {
    match body.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}
