use anyhow::Context;
use dotenvy::dotenv;
use schoolhouse::logging::init_tracing;
use schoolhouse::metrics::init_metrics;
use schoolhouse::router::init_router;
use schoolhouse::schoolhouse_config::{DatabaseConfig, ServerConfig};
use schoolhouse::schoolhouse_db::init_db_pool;
use schoolhouse::state::init_app_state;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    init_tracing(&server_config).context("Failed to initialize logging")?;

    let db = init_db_pool(&DatabaseConfig::from_env()?)
        .await
        .context("Failed to connect to database")?;

    let metrics = if server_config.metrics_enabled {
        Some(init_metrics().context("Failed to install Prometheus recorder")?)
    } else {
        None
    };

    let app = init_router(init_app_state(db), metrics);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Server listening");
    info!("Swagger UI available at /swagger-ui, Scalar UI at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
