//! API-specific error types
//!
//! Every failure surfaces as one [`ApiError`]. A status code of `0` means the
//! server never produced a usable answer (network failure, timeout, malformed
//! response, or a local check that failed before any I/O).

use aisocial_domain::constants::GENERIC_ERROR_MESSAGE;
use aisocial_domain::{AiSocialError, ErrorEnvelope};
use thiserror::Error;

/// Categories of API errors, derived from the status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401 and 403
    Authentication,
    /// 404
    NotFound,
    /// 429
    RateLimit,
    /// Other 4xx
    Client,
    /// 5xx
    Server,
    /// Request did not complete or the response could not be decoded
    Transport,
    /// Rejected locally before sending
    Validation,
    /// Client could not be constructed
    Config,
}

/// API operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a status code of 400 or above
    #[error("{message} (status {status})")]
    Api { status: u16, message: String, code: Option<String> },

    /// The request could not complete
    #[error("{message}")]
    Transport { message: String },

    /// Rejected locally before any I/O
    #[error("Validation error: {0}")]
    Validation(String),

    /// The client could not be constructed or configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build an API error from a non-success status and its raw body
    ///
    /// Missing or unparseable `error.message` falls back to a generic message;
    /// a missing `error.code` stays `None`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let envelope = ErrorEnvelope::from_slice(body);
        Self::Api {
            status,
            message: envelope.error.message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            code: envelope.error.code,
        }
    }

    /// Transport error with the given description
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    /// HTTP status code; `0` when the server did not answer
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            Self::Transport { .. } | Self::Validation(_) | Self::Config(_) => 0,
        }
    }

    /// Human-readable message without the status decoration
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. } | Self::Transport { message } => message,
            Self::Validation(message) | Self::Config(message) => message,
        }
    }

    /// Machine-readable code sent by the server, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Whether the server could not be reached or answered unusably
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Get the error category for this error
    pub const fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Api { status: 401 | 403, .. } => ApiErrorCategory::Authentication,
            Self::Api { status: 404, .. } => ApiErrorCategory::NotFound,
            Self::Api { status: 429, .. } => ApiErrorCategory::RateLimit,
            Self::Api { status, .. } if *status >= 500 => ApiErrorCategory::Server,
            Self::Api { .. } => ApiErrorCategory::Client,
            Self::Transport { .. } => ApiErrorCategory::Transport,
            Self::Validation(_) => ApiErrorCategory::Validation,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<AiSocialError> for ApiError {
    fn from(err: AiSocialError) -> Self {
        match err {
            AiSocialError::Config(message) => Self::Config(message),
            AiSocialError::InvalidInput(message) => Self::Validation(message),
            AiSocialError::Serialization(message) => Self::Transport { message },
        }
    }
}
