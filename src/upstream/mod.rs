//! Upstream data sources
//!
//! - **client**: HTTP client for the VersoZap backend roster
//! - **fallback**: static sample data substituted when the backend is down
//!
//! The only failure handling here is the substitution itself: no retries,
//! no error surfaced to the caller.

pub mod client;
pub mod fallback;

pub use client::{BackendClient, BackendConfig, BackendError};
pub use fallback::{sample_logs, sample_users};
