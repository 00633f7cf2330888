//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::domain::LogEntry;
use crate::settings::Settings;
use crate::upstream::{sample_logs, BackendClient};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the VersoZap backend (user roster source)
    pub backend: Arc<BackendClient>,
    /// System log feed served to the dashboard
    pub logs: Arc<Vec<LogEntry>>,
    /// Current product settings
    pub settings: Arc<Settings>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the sample log feed and default settings
    pub fn new(backend: Arc<BackendClient>, config: ApiConfig) -> Self {
        Self {
            backend,
            logs: Arc::new(sample_logs()),
            settings: Arc::new(Settings::default()),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create an AppState with a specific log feed
    pub fn with_logs(backend: Arc<BackendClient>, config: ApiConfig, logs: Vec<LogEntry>) -> Self {
        Self {
            backend,
            logs: Arc::new(logs),
            settings: Arc::new(Settings::default()),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable the CSV export endpoints
    pub enable_export: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            enable_export: true,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
