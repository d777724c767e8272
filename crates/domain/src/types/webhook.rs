//! Webhook registration payload

use serde::{Deserialize, Serialize};

/// Webhook subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Delivery endpoint
    pub url: String,
    /// Event names to subscribe to (e.g. `"post.published"`)
    pub events: Vec<String>,
    /// Shared secret used by the server to sign deliveries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl WebhookConfig {
    /// Subscription without a signing secret
    pub fn new<I, S>(url: impl Into<String>, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { url: url.into(), events: events.into_iter().map(Into::into).collect(), secret: None }
    }

    /// Sign deliveries with this secret
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}
