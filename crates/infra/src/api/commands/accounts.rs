use aisocial_domain::ConnectAccountRequest;
use reqwest::Method;
use serde_json::Value;
use tracing::{info, instrument};

use super::{endpoint, resource_path, ApiCommands};
use crate::api::client::NO_BODY;
use crate::api::errors::ApiError;

const ACCOUNTS: &str = "/social-accounts";

impl ApiCommands {
    // === Social Account Operations ===

    #[instrument(skip(self))]
    pub async fn list_social_accounts(&self) -> Result<Vec<Value>, ApiError> {
        self.client.request_data(Method::GET, &endpoint(ACCOUNTS), &(), NO_BODY).await
    }

    /// Connect an account by exchanging an OAuth authorization code
    #[instrument(skip(self, auth_code))]
    pub async fn connect_social_account(
        &self,
        platform: &str,
        auth_code: &str,
    ) -> Result<Value, ApiError> {
        let body =
            ConnectAccountRequest { platform: platform.to_string(), auth_code: auth_code.to_string() };
        let account: Value = self
            .client
            .request_data(Method::POST, &endpoint("/social-accounts/connect"), &(), Some(&body))
            .await?;

        info!(platform, "Social account connected");
        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn disconnect_social_account(&self, account_id: &str) -> Result<(), ApiError> {
        self.client.request_unit(Method::DELETE, &resource_path(ACCOUNTS, account_id)).await?;

        info!(account_id, "Social account disconnected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClient;

    fn commands_for(server: &MockServer) -> ApiCommands {
        let client = ApiClient::builder().base_url(server.uri()).api_key("key-1").build().unwrap();
        ApiCommands::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_connect_account() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/social-accounts/connect"))
            .and(body_json(json!({ "platform": "linkedin", "authCode": "code-1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": "a1", "platform": "linkedin" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let account =
            commands_for(&server).connect_social_account("linkedin", "code-1").await.unwrap();
        assert_eq!(account["id"], "a1");
    }

    #[tokio::test]
    async fn test_list_and_disconnect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/social-accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/social-accounts/a1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "message": "Account not found", "code": "NOT_FOUND" }
            })))
            .mount(&server)
            .await;

        let commands = commands_for(&server);
        assert!(commands.list_social_accounts().await.unwrap().is_empty());

        let err = commands.disconnect_social_account("a1").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Account not found");
    }
}
