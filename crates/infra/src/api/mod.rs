//! Client for the AI social media API
//!
//! [`ApiClient`] is the single choke-point for outbound calls: it attaches
//! credentials, unwraps the response envelope and normalizes failures into
//! [`ApiError`]. [`ApiCommands`] maps each domain operation onto one client
//! call.
//!
//! # Architecture
//!
//! - Uses [`HttpClient`](crate::http::HttpClient) for the wire (no direct
//!   reqwest client construction here)
//! - One attempt per call: no retry, no caching
//! - Credentials change only through `login` and `refresh_token`

pub mod auth;
pub mod client;
pub mod commands;
pub mod errors;

pub use auth::{AuthContext, AuthMode};
pub use client::{ApiClient, ApiClientBuilder, NO_BODY};
pub use commands::ApiCommands;
pub use errors::{ApiError, ApiErrorCategory};
