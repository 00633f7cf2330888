//! VersoZap backend client
//!
//! HTTP client for the backend the admin service reads from. The only read
//! is the user roster; when it fails for any reason the caller falls back
//! to the static sample data in [`super::fallback`].

use reqwest::Client;
use thiserror::Error;

use super::fallback;
use crate::domain::User;

/// Client for the VersoZap backend REST API
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the VersoZap backend
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://versozap-backend.onrender.com".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

impl BackendClient {
    /// Create a new backend client with the given configuration
    pub fn new(config: BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Check if the backend is reachable
    pub async fn health_check(&self) -> Result<(), BackendError> {
        let url = format!("{}/usuarios", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(BackendError::Unavailable)
        }
    }

    /// Fetch the full user roster
    ///
    /// `GET {base_url}/usuarios` returning a JSON array of users. The
    /// endpoint is unauthenticated and unpaginated.
    pub async fn fetch_users(&self) -> Result<Vec<User>, BackendError> {
        let url = format!("{}/usuarios", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if response.status().is_success() {
            let users = response.json().await.map_err(BackendError::Request)?;
            Ok(users)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(BackendError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Fetch the roster, substituting the sample data on any failure
    ///
    /// The substitution is logged but never surfaced as an error; the
    /// dashboard stays usable while the backend is down.
    pub async fn fetch_users_or_fallback(&self) -> Vec<User> {
        match self.fetch_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(error = %e, "Backend roster unavailable, serving sample data");
                fallback::sample_users()
            }
        }
    }
}

fn classify_transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_connect() {
        BackendError::Unavailable
    } else {
        BackendError::Request(e)
    }
}

/// Errors from the VersoZap backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,
}
