//! Parameterized queries against `users`.

use crate::error::{classify_write_error, AppError};
use crate::model::{User, UserInput};
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT * FROM users ORDER BY created_at DESC";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING *";
const UPDATE: &str =
    "UPDATE users SET name = $1, email = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $3 RETURNING *";
const DELETE: &str = "DELETE FROM users WHERE id = $1 RETURNING id";

/// Each call borrows one pooled connection for a single statement; the
/// connection returns to the pool when the query future completes or fails.
pub struct UserService;

impl UserService {
    /// All users, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, User>(SELECT_ALL).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, User>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one user. A duplicate email surfaces as `AppError::Conflict`.
    pub async fn create(pool: &PgPool, input: &UserInput) -> Result<User, AppError> {
        tracing::debug!(sql = %INSERT, "query");
        sqlx::query_as::<_, User>(INSERT)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
            .map_err(classify_write_error)
    }

    /// Replace name and email and refresh `updated_at`. `None` when no row has `id`.
    pub async fn update(pool: &PgPool, id: i32, input: &UserInput) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %UPDATE, id, "query");
        sqlx::query_as::<_, User>(UPDATE)
            .bind(&input.name)
            .bind(&input.email)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(classify_write_error)
    }

    /// Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let row: Option<(i32,)> = sqlx::query_as(DELETE).bind(id).fetch_optional(pool).await?;
        Ok(row.is_some())
    }
}
