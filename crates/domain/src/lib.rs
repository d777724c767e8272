//! # AI Social Domain
//!
//! Schema layer for the AI Social client library.
//!
//! This crate contains:
//! - Request and response payload types (posts, AI, analytics, listening, ...)
//! - Wire enums with lowercase string forms
//! - Response envelopes and cursor pagination
//! - Client configuration structure
//! - Domain error type and Result definition
//!
//! ## Architecture
//! - No dependencies on other AI Social crates
//! - No I/O; every type is a plain data-transfer shape

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
