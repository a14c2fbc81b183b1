//! Backend server connection settings.

use std::time::Duration;

use dossier_core::enums::LookupStrategy;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Backend root URL (scheme + host + optional path prefix).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How completed queries are mapped to reports.
    #[serde(default)]
    pub lookup: LookupStrategy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            lookup: LookupStrategy::default(),
        }
    }
}

impl ServerConfig {
    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Join an absolute API path (`/api/...`) to the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base(), path.trim_start_matches('/'))
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base();
        if base.is_empty() {
            return Err(ConfigError::invalid("server.base_url", "must not be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "server.base_url",
                format!("'{base}' must start with http:// or https://"),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "server.request_timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
