//! HTTP client configuration

use serde::{Deserialize, Serialize};

use super::Environment;

/// Configuration for the backend HTTP client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the backend API (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Timeout for API requests in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum extra attempts for requests that fail at the network level.
    /// HTTP error responses are never retried.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay between retry attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl ClientConfig {
    /// Create a configuration pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }

    /// Load configuration from layered sources: the environment's `.env`
    /// file, an optional `farmadesk.toml`, then `FARMADESK_*` environment
    /// variables (highest precedence).
    ///
    /// An empty `base_url` means same-origin deployment behind a reverse
    /// proxy, mirroring the backend's default layout.
    pub fn load(env: Environment) -> Result<Self, config::ConfigError> {
        // A missing .env file is fine; variables may come from the process
        let _ = dotenvy::from_filename(env.env_file());

        config::Config::builder()
            .set_default("base_url", "")?
            .set_default("request_timeout_secs", 30)?
            .set_default("max_retries", 1)?
            .set_default("retry_delay_ms", 500)?
            .add_source(config::File::with_name("farmadesk").required(false))
            .add_source(config::Environment::with_prefix("FARMADESK"))
            .build()?
            .try_deserialize()
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}
