//! Error types raised by the schema layer and configuration handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the domain crate
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AiSocialError {
    /// Configuration missing or unreadable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Value rejected by a local check
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AiSocialError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, AiSocialError>;
