//! Endpoint wrappers
//!
//! Each method maps to exactly one [`ApiClient`] call: a fixed verb, a fixed
//! path template, a fixed split of inputs between query string and JSON body,
//! and a fixed projection of the response:
//!
//! | Operation class | Returns |
//! |---|---|
//! | create/get/update/publish/connect | the envelope's `data` |
//! | delete/disconnect | `()` |
//! | cursor-paginated list | the full envelope as a [`Page`](aisocial_domain::Page) |
//! | unpaginated list | `data` as a `Vec` |
//!
//! Nothing is retried or cached; errors propagate unchanged.

mod accounts;
mod ai;
mod analytics;
mod inbox;
mod listening;
mod posts;
mod webhooks;

use std::sync::Arc;

use aisocial_domain::constants::API_PREFIX;
use urlencoding::encode;

use super::client::ApiClient;

/// API commands for domain operations
#[derive(Debug, Clone)]
pub struct ApiCommands {
    client: Arc<ApiClient>,
}

impl ApiCommands {
    /// Create a new commands instance
    ///
    /// # Arguments
    ///
    /// * `client` - API client; shared so login/refresh on it affect every
    ///   later command
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// The underlying transport client (for login and refresh)
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

/// Versioned path for a collection, e.g. `/api/v1/posts`
fn endpoint(resource: &str) -> String {
    format!("{API_PREFIX}{resource}")
}

/// Versioned path for one resource, with the id percent-encoded
fn resource_path(resource: &str, id: &str) -> String {
    format!("{API_PREFIX}{resource}/{}", encode(id))
}

/// Versioned path for an action on one resource, e.g. `/api/v1/posts/p1/publish`
fn action_path(resource: &str, id: &str, action: &str) -> String {
    format!("{}/{action}", resource_path(resource, id))
}
