//! HTTP handlers for the service index, health and the user resource.

pub mod common;
pub mod users;
