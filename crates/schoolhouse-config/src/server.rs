use std::env;

use crate::env_or;

/// Listener and process-level settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve Prometheus metrics at `/metrics`
    pub metrics_enabled: bool,
    /// Directory for rotated JSON log files; console only when unset
    pub log_dir: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            metrics_enabled: env::var("METRICS_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
            log_dir: env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
