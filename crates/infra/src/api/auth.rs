//! Credential state and authentication headers
//!
//! [`AuthContext`] holds the client's current credentials. At most one auth
//! header is attached per request: a bearer token wins over an API key, and
//! with neither configured the request goes out unauthenticated.

use std::fmt;

use aisocial_domain::constants::{API_KEY_HEADER, BEARER_PREFIX};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

use super::errors::ApiError;

/// Which credential the next request will carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// `X-API-Key: <key>`
    ApiKey,
    /// No auth header
    Anonymous,
}

/// The client's current credentials
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    api_key: Option<String>,
    access_token: Option<String>,
}

impl AuthContext {
    /// Credentials as configured at construction
    pub fn new(api_key: Option<String>, access_token: Option<String>) -> Self {
        Self { api_key, access_token }
    }

    /// Which credential [`AuthContext::auth_headers`] will attach
    pub fn mode(&self) -> AuthMode {
        if self.access_token.is_some() {
            AuthMode::Bearer
        } else if self.api_key.is_some() {
            AuthMode::ApiKey
        } else {
            AuthMode::Anonymous
        }
    }

    /// Current bearer token, if any
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Configured API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Replace the access token in place
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    /// Headers carrying the credential in effect
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the credential contains characters that
    /// are not valid in an HTTP header.
    pub fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        match (&self.access_token, &self.api_key) {
            (Some(token), _) => {
                headers.insert(AUTHORIZATION, sensitive(&format!("{BEARER_PREFIX}{token}"))?);
            }
            (None, Some(key)) => {
                headers.insert(HeaderName::from_static("x-api-key"), sensitive(key)?);
            }
            (None, None) => {}
        }

        Ok(headers)
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn sensitive(value: &str) -> Result<HeaderValue, ApiError> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        ApiError::Config(format!("credential is not a valid {API_KEY_HEADER}/Authorization value"))
    })?;
    header.set_sensitive(true);
    Ok(header)
}
