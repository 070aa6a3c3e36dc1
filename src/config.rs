//! Configuration handling for the form

use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

/// Environment variable holding the form endpoint URL
pub const ENDPOINT_VAR: &str = "REVIEW_FORM_ENDPOINT";

/// Timeout applied to every request sent to the endpoint
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Runtime configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Hosted form endpoint receiving both submissions and surveys
    pub endpoint: Url,
}

impl FormConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(ENDPOINT_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEndpoint(ENDPOINT_VAR))?;

        let endpoint = Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint {
            value: raw.clone(),
            source,
        })?;

        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}
