//! Request logging and subscriber initialisation.

use std::fs;
use std::io;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use schoolhouse_config::ServerConfig;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Request completed"
        ),
    }

    response
}

/// Installs the global subscriber.
///
/// Console output is filtered by `RUST_LOG`. When `LOG_DIR` is configured,
/// `info` and above are also written as JSON to a daily rotated file.
pub fn init_tracing(config: &ServerConfig) -> io::Result<()> {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,hyper=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let json_layer = match &config.log_dir {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "schoolhouse.json");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();

    Ok(())
}
