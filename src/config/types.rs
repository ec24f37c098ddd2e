//! Service and pool settings.

use sqlx::postgres::PgConnectOptions;
use std::time::Duration;

/// Store coordinates and listen port. Every field has a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub port: u16,
    pub pool: PoolSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            db_host: "localhost".into(),
            db_port: 5432,
            db_name: "userdb".into(),
            db_user: "postgres".into(),
            db_password: "postgres".into(),
            port: 3000,
            pool: PoolSettings::default(),
        }
    }
}

impl ServiceConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }
}

/// Pool bounds. Fixed; not read from the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// Connections unused for longer than this are closed.
    pub idle_timeout: Duration,
    /// A query fails if no connection frees up within this window.
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings {
            max_connections: 10,
            idle_timeout: Duration::from_secs(30),
            acquire_timeout: Duration::from_secs(10),
        }
    }
}
