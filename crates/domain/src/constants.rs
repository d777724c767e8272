//! API constants
//!
//! Centralized location for the wire-level constants shared by the schema
//! layer and the transport client.

// Connection defaults
/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Versioned path prefix for every endpoint
/// Prefix of every endpoint path
pub const API_PREFIX: &str = "/api/v1";

// Authentication headers
/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";
/// Scheme prefix of the `Authorization` value
pub const BEARER_PREFIX: &str = "Bearer ";

// Fallback message when an error envelope carries no usable message
/// Message used when an error body has none
pub const GENERIC_ERROR_MESSAGE: &str = "API Error";

// Pagination defaults
/// Page size for post listings
pub const DEFAULT_POSTS_LIMIT: u32 = 20;
/// Page size for inbox listings
pub const DEFAULT_INBOX_LIMIT: u32 = 20;
/// Page size for mention listings
pub const DEFAULT_MENTIONS_LIMIT: u32 = 50;

// AI defaults
/// Number of hashtags requested
pub const DEFAULT_HASHTAG_COUNT: u32 = 30;
/// Planning horizon for strategy recommendations
pub const DEFAULT_STRATEGY_TIMEFRAME: &str = "30_days";
