//! Connection pool construction and `users` table bootstrap.

use crate::config::ServiceConfig;
use crate::error::{has_sqlstate, AppError, DUPLICATE_TABLE, UNIQUE_VIOLATION};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Attempts made by the startup initializer before giving up.
pub const INIT_ATTEMPTS: u32 = 5;

const BASE_DELAY_MS: u64 = 1_000;
const MAX_DELAY_MS: u64 = 10_000;

pub const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) UNIQUE NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Build the pool without connecting. Connections open on first use, so the
/// server can accept requests while the store is still unreachable.
pub fn connect_pool(config: &ServiceConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .idle_timeout(config.pool.idle_timeout)
        .acquire_timeout(config.pool.acquire_timeout)
        .connect_lazy_with(config.connect_options())
}

/// Delay before retrying after failed `attempt` (1-based): 1s, 2s, 4s, 8s, then capped at 10s.
pub fn backoff_delay(attempt: u32) -> Duration {
    let exp = attempt.saturating_sub(1).min(16);
    let ms = BASE_DELAY_MS.saturating_mul(1u64 << exp).min(MAX_DELAY_MS);
    Duration::from_millis(ms)
}

/// Probe connectivity, then create `users` if absent. Safe to run on every start.
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    match sqlx::query(USERS_DDL).execute(pool).await {
        Ok(_) => Ok(()),
        // Another instance won the CREATE TABLE race.
        Err(e) if has_sqlstate(&e, DUPLICATE_TABLE) || has_sqlstate(&e, UNIQUE_VIOLATION) => {
            tracing::debug!(error = %e, "users table created concurrently");
            Ok(())
        }
        Err(e) => Err(AppError::Db(e)),
    }
}

/// Run `ensure_users_table` up to `attempts` times with exponential backoff.
/// Returns the last error when every attempt fails.
pub async fn initialize_store(pool: &PgPool, attempts: u32) -> Result<(), AppError> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match ensure_users_table(pool).await {
            Ok(()) => {
                tracing::info!("database initialized successfully");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(attempt, attempts, error = %e, "database initialization attempt failed");
                if attempt >= attempts {
                    return Err(e);
                }
                let delay = backoff_delay(attempt);
                tracing::info!(delay_ms = delay.as_millis() as u64, "retrying database initialization");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Run the initializer in the background. Failure is logged; the service keeps running
/// and requests fail on their own when they reach the store.
pub fn spawn_initializer(pool: PgPool) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = initialize_store(&pool, INIT_ATTEMPTS).await {
            tracing::error!(error = %e, "failed to initialize database after all retries");
        }
    })
}
