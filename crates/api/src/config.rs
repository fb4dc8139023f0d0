//! API client configuration.

use std::env;
use std::time::Duration;

/// Development default; overridden by `CLEAVER_API_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable selecting the backend origin.
pub const ENV_BASE_URL: &str = "CLEAVER_API_URL";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every request path is appended to, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Read the base URL from the environment, falling back to the local
    /// development address.
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
