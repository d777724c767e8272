//! API client: the single choke-point for every outbound call
//!
//! Builds the absolute URL, attaches the JSON content type and the auth header
//! in effect, sends exactly one request, and normalizes the outcome:
//!
//! - status below 400: the body is parsed as JSON and returned verbatim (an
//!   empty body becomes `null`)
//! - status 400 and above: [`ApiError::Api`] with the envelope's message/code
//! - no usable response: [`ApiError::Transport`] with status `0`
//!
//! # Concurrency
//!
//! The client is `Send + Sync` and can be shared behind an `Arc`. Each request
//! snapshots the auth header when it is built. A login or refresh that
//! completes while other requests are in flight only affects requests built
//! afterwards; with concurrent logins the last one to finish wins.

use std::time::Duration;

use aisocial_domain::constants::{API_PREFIX, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use aisocial_domain::{AuthSession, ClientConfig, LoginRequest, QueryParams, RefreshRequest};
use parking_lot::RwLock;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::auth::{AuthContext, AuthMode};
use super::errors::ApiError;
use crate::config;
use crate::http::HttpClient;

/// Placeholder for requests that carry no JSON body
pub const NO_BODY: Option<&'static ()> = None;

/// Client for the AI Social REST API
#[derive(Debug)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
    auth: RwLock<AuthContext>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Create a client from `AISOCIAL_*` environment variables, falling back
    /// to a config file
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if no usable configuration is found.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(config::load()?)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout
    pub const fn timeout(&self) -> Duration {
        self.http_client.timeout()
    }

    /// Which credential the next request will carry
    pub fn auth_mode(&self) -> AuthMode {
        self.auth.read().mode()
    }

    /// Issue one request and return the decoded JSON body
    ///
    /// `path` is appended to the base URL as-is. Only the query parameters
    /// present in `query` are sent; `body` is serialized as JSON.
    ///
    /// # Errors
    ///
    /// See the module documentation for the error contract.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        query: &dyn QueryParams,
        body: Option<&B>,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let pairs = query.query_pairs();

        // Snapshot credentials; the guard is released before any await.
        let auth_headers = self.auth.read().auth_headers()?;

        let mut request = self
            .http_client
            .request(method, &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .headers(auth_headers);

        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http_client.send(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.as_u16() >= 400 {
            let err = ApiError::from_response(status.as_u16(), &bytes);
            warn!(status = status.as_u16(), code = ?err.code(), "API returned an error");
            return Err(err);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!(status = status.as_u16(), "empty response body");
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {e}")))
    }

    /// Issue a request and deserialize the whole response envelope
    ///
    /// # Errors
    ///
    /// As [`ApiClient::request`]; a body that does not match `T` is a
    /// transport error.
    pub async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &dyn QueryParams,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.request(method, path, query, body).await?;
        decode(value)
    }

    /// Issue a request and return the envelope's `data` field
    ///
    /// # Errors
    ///
    /// As [`ApiClient::request`]; a missing `data` field or one that does not
    /// match `T` is a transport error.
    pub async fn request_data<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &dyn QueryParams,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut value = self.request(method, path, query, body).await?;
        let data = value
            .get_mut("data")
            .map(Value::take)
            .ok_or_else(|| ApiError::transport("Response envelope has no `data` field"))?;
        decode(data)
    }

    /// Issue a request whose payload the caller does not need
    ///
    /// # Errors
    ///
    /// As [`ApiClient::request`].
    pub async fn request_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.request(method, path, &(), NO_BODY).await.map(|_| ())
    }

    /// Log in with email and password
    ///
    /// On success the returned access token replaces the current one and is
    /// sent as `Authorization: Bearer` on every later request, in preference
    /// to any configured API key.
    ///
    /// # Errors
    ///
    /// Returns the normalized error; credentials are left untouched on failure,
    /// including when the returned token cannot be sent as a header.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let body = LoginRequest { email: email.to_string(), password: password.to_string() };
        let session: AuthSession = self
            .request_data(Method::POST, &format!("{API_PREFIX}/auth/login"), &(), Some(&body))
            .await?;

        self.install_token(&session)?;
        info!("Login successful");
        Ok(session)
    }

    /// Exchange a refresh token for a new access token
    ///
    /// Same storage side effect as [`ApiClient::login`].
    ///
    /// # Errors
    ///
    /// Returns the normalized error; credentials are left untouched on failure.
    #[instrument(skip_all)]
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthSession, ApiError> {
        let body = RefreshRequest { refresh_token: refresh_token.to_string() };
        let session: AuthSession = self
            .request_data(Method::POST, &format!("{API_PREFIX}/auth/refresh"), &(), Some(&body))
            .await?;

        self.install_token(&session)?;
        info!("Access token refreshed");
        Ok(session)
    }

    /// Swap in the session's access token once it is known to be sendable
    fn install_token(&self, session: &AuthSession) -> Result<(), ApiError> {
        let mut candidate = self.auth.read().clone();
        candidate.set_access_token(session.access_token.clone());
        candidate.auth_headers().map_err(|_| {
            ApiError::transport("Server returned an access token that is not a valid header value")
        })?;

        self.auth.write().set_access_token(session.access_token.clone());
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::transport(format!("Unexpected response shape: {e}")))
}

/// Builder for API client
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    api_key: Option<String>,
    access_token: Option<String>,
    user_agent: Option<String>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
            access_token: None,
            user_agent: None,
        }
    }
}

impl ApiClientBuilder {
    /// Take every setting from a [`ClientConfig`]
    pub fn config(self, config: ClientConfig) -> Self {
        let timeout = config.timeout_duration();
        Self {
            base_url: config.base_url,
            timeout,
            api_key: config.api_key,
            access_token: config.access_token,
            user_agent: config.user_agent,
        }
    }

    /// API base URL; a trailing slash is trimmed at build time
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout (default 30 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// API key sent as `X-API-Key` when no access token is set
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Initial bearer token; takes precedence over the API key
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// User agent override
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the credentials are not valid header
    /// values or the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let auth = AuthContext::new(self.api_key, self.access_token);
        // Reject credentials that can never be sent before the first request.
        auth.auth_headers()?;

        let mut http = HttpClient::builder().timeout(self.timeout);
        if let Some(agent) = self.user_agent {
            http = http.user_agent(agent);
        }

        let base_url = self.base_url.trim_end_matches('/').to_string();
        debug!(base_url = %base_url, auth_mode = ?auth.mode(), "API client configured");

        Ok(ApiClient { http_client: http.build()?, base_url, auth: RwLock::new(auth) })
    }
}
