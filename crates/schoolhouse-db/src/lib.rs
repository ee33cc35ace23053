//! # Schoolhouse DB
//!
//! Database pool and migrations for the Schoolhouse API.
//!
//! This crate provides connection pool initialization using SQLx with
//! PostgreSQL, and embeds the workspace `migrations/` directory.
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_config::DatabaseConfig;
//! use schoolhouse_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use schoolhouse_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be passed to the
/// application state for use in request handlers.
///
/// # Errors
///
/// Returns the driver error when the first connection cannot be established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
