//! # Client Configuration
//!
//! Connection settings for one node endpoint, loadable from environment
//! variables and validated before use.
//!
//! Unlike server-side configuration there is no global instance: a
//! `NodeConfig` belongs to the client it configures, and several clients
//! with different endpoints can coexist in one process.

use std::env;
use std::time::Duration;

/// Environment variable naming the node's API base URL
const ENV_API_URL: &str = "NODE_API_URL";

/// Environment variable overriding the HTTP timeout, in seconds
const ENV_HTTP_TIMEOUT: &str = "NODE_HTTP_TIMEOUT_SECS";

/// Default node endpoint when none is configured
const DEFAULT_API_BASE: &str = "http://localhost:5001/api/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for one node endpoint.
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Base URL of the node REST API, e.g. `http://localhost:5001/api/v1`
    pub api_base: String,

    /// Timeout applied to every HTTP request
    pub timeout: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl NodeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let api_base = env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let timeout_secs: u64 = env::var(ENV_HTTP_TIMEOUT)
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| format!("{} must be a valid number: {}", ENV_HTTP_TIMEOUT, e))?;

        let config = Self {
            api_base,
            timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base.is_empty() {
            return Err(format!("{} must not be empty", ENV_API_URL));
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(format!("{} must be an http(s) URL", ENV_API_URL));
        }

        if self.timeout.is_zero() {
            return Err(format!("{} must be at least 1", ENV_HTTP_TIMEOUT));
        }

        Ok(())
    }
}
