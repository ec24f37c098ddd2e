//! Persistence layer: explicit results instead of raw store errors.

pub mod users;

pub use users::UserService;
