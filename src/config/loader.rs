//! Load service config from environment variables.

use crate::config::types::ServiceConfig;
use crate::error::ConfigError;

pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_PORT: &str = "PORT";

impl ServiceConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = ServiceConfig::default();
        Ok(ServiceConfig {
            db_host: get(ENV_DB_HOST).unwrap_or(defaults.db_host),
            db_port: parse_port(ENV_DB_PORT, get(ENV_DB_PORT), defaults.db_port)?,
            db_name: get(ENV_DB_NAME).unwrap_or(defaults.db_name),
            db_user: get(ENV_DB_USER).unwrap_or(defaults.db_user),
            db_password: get(ENV_DB_PASSWORD).unwrap_or(defaults.db_password),
            port: parse_port(ENV_PORT, get(ENV_PORT), defaults.port)?,
            pool: defaults.pool,
        })
    }
}

fn parse_port(key: &'static str, raw: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}
