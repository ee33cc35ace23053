//! # Schoolhouse Config
//!
//! Configuration types for the Schoolhouse API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: JWT authentication configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: Listener address and metrics toggle
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let database_config = DatabaseConfig::from_env()?;
//! let server_config = ServerConfig::from_env();
//! ```

use std::env;
use std::str::FromStr;

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads `key` from the environment, falling back to `default` when it is
/// unset or does not parse.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
