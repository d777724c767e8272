//! # AI Social Infrastructure
//!
//! I/O side of the AI social media client.
//!
//! This crate contains:
//! - The HTTP transport (reqwest, single attempt, fixed timeout)
//! - The API client with its auth and error contracts
//! - Endpoint wrappers for posts, AI content, analytics, listening, inbox,
//!   webhooks and social accounts
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Payload types live in `aisocial-domain`
//! - Contains all "impure" code (network, environment, filesystem)

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientBuilder, ApiCommands, ApiError, ApiErrorCategory, AuthContext, AuthMode,
    NO_BODY,
};
pub use http::{HttpClient, HttpClientBuilder};
