//! # VersoZap Admin
//!
//! Backend service for the VersoZap administrative dashboard. VersoZap
//! delivers daily Bible readings over WhatsApp; this service gives the
//! admin pages their data: the user roster, system logs, global settings
//! and overview metrics.
//!
//! ## Features
//!
//! - **Roster with fallback**: users come from the VersoZap backend, with
//!   static sample data substituted whenever the backend is down
//! - **In-memory filtering**: free-text search plus enum criteria over
//!   users and logs, order preserving
//! - **Derived statistics**: active/inactive counts and per-level /
//!   per-category log breakdowns
//! - **CSV export**: the roster and log feed as downloads
//!
//! ## Modules
//!
//! - [`domain`]: Record types, filters and statistics
//! - [`upstream`]: Backend client and fallback data
//! - [`api`]: REST API server with Axum
//! - [`settings`]: Product settings model
//! - [`config`]: Service configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use versozap_admin::api::{serve, ApiConfig, AppState};
//! use versozap_admin::upstream::{BackendClient, BackendConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(BackendClient::new(BackendConfig::default()));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(backend, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod settings;
pub mod upstream;

// Re-export top-level types for convenience
pub use domain::{
    filter_logs, filter_users, log_stats, user_stats, LogCategory, LogEntry, LogLevel, LogQuery,
    LogStats, ReadingPlan, StatusFilter, User, UserQuery, UserStats,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use upstream::{BackendClient, BackendConfig, BackendError};

pub use settings::{Settings, SettingsSection};

pub use config::{Config, ConfigError, LoggingConfig};
