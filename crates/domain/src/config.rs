//! Client configuration
//!
//! Connection settings for the transport client. Deserializable from TOML or
//! JSON; every field except the credentials has a default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Connection configuration for the API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the `/api/v1/...` paths are appended to (no trailing slash)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// API key sent as `X-API-Key` when no access token is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Bearer token; takes precedence over the API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Overrides reqwest's default user agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
            access_token: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Configuration authenticating with an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self { api_key: Some(api_key.into()), ..Self::default() }
    }

    /// Configuration authenticating with a bearer access token
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self { access_token: Some(access_token.into()), ..Self::default() }
    }

    /// Override the base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether any credential is configured
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.access_token.is_some()
    }
}
