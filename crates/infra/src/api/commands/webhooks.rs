use aisocial_domain::WebhookConfig;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{action_path, endpoint, resource_path, ApiCommands};
use crate::api::client::NO_BODY;
use crate::api::errors::ApiError;

const WEBHOOKS: &str = "/webhooks";

impl ApiCommands {
    // === Webhook Operations ===

    #[instrument(skip_all, fields(url = %config.url, events = config.events.len()))]
    pub async fn create_webhook(&self, config: &WebhookConfig) -> Result<Value, ApiError> {
        self.client.request_data(Method::POST, &endpoint(WEBHOOKS), &(), Some(config)).await
    }

    #[instrument(skip(self))]
    pub async fn list_webhooks(&self) -> Result<Vec<Value>, ApiError> {
        let webhooks: Vec<Value> =
            self.client.request_data(Method::GET, &endpoint(WEBHOOKS), &(), NO_BODY).await?;

        debug!(count = webhooks.len(), "Webhooks listed");
        Ok(webhooks)
    }

    /// Ask the server to send a test delivery
    #[instrument(skip(self))]
    pub async fn test_webhook(&self, webhook_id: &str) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::POST, &action_path(WEBHOOKS, webhook_id, "test"), &(), NO_BODY)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), ApiError> {
        self.client.request_unit(Method::DELETE, &resource_path(WEBHOOKS, webhook_id)).await
    }
}
