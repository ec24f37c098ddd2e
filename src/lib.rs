//! User management REST service over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{PoolSettings, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use model::{User, UserInput};
pub use routes::{app, common_routes, user_routes};
pub use service::UserService;
pub use state::AppState;
pub use store::{backoff_delay, connect_pool, ensure_users_table, initialize_store, spawn_initializer};
