use aisocial_domain::{AssignRequest, InboxMessagesParams, Page, ReplyRequest, ReplyTemplate};
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use super::{action_path, endpoint, ApiCommands};
use crate::api::client::NO_BODY;
use crate::api::errors::ApiError;

const MESSAGES: &str = "/inbox/messages";

impl ApiCommands {
    // === Unified Inbox Operations ===

    /// Messages across connected accounts, one page at a time
    #[instrument(skip(self))]
    pub async fn get_inbox_messages(
        &self,
        params: &InboxMessagesParams,
    ) -> Result<Page<Value>, ApiError> {
        self.client.request_json(Method::GET, &endpoint(MESSAGES), params, NO_BODY).await
    }

    /// Reply to a message
    ///
    /// With `use_template` set, `content` names a saved reply template.
    #[instrument(skip(self, content))]
    pub async fn reply_to_message(
        &self,
        message_id: &str,
        content: &str,
        use_template: bool,
    ) -> Result<Value, ApiError> {
        let body = ReplyRequest { content: content.to_string(), use_template };
        self.client
            .request_data(Method::POST, &action_path(MESSAGES, message_id, "reply"), &(), Some(&body))
            .await
    }

    #[instrument(skip(self))]
    pub async fn assign_message(&self, message_id: &str, user_id: &str) -> Result<Value, ApiError> {
        let body = AssignRequest { user_id: user_id.to_string() };
        self.client
            .request_data(Method::PUT, &action_path(MESSAGES, message_id, "assign"), &(), Some(&body))
            .await
    }

    #[instrument(skip_all, fields(name = %template.name))]
    pub async fn create_reply_template(&self, template: &ReplyTemplate) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::POST, &endpoint("/inbox/templates"), &(), Some(template))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClient;

    fn commands_for(server: &MockServer) -> ApiCommands {
        let client = ApiClient::builder().base_url(server.uri()).api_key("key-1").build().unwrap();
        ApiCommands::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_inbox_messages_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/inbox/messages"))
            .and(query_param("status", "unread"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": "m1" }],
                "nextCursor": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = InboxMessagesParams::default().status("unread");
        let page = commands_for(&server).get_inbox_messages(&params).await.unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page.next_cursor(), None);
    }

    #[tokio::test]
    async fn test_reply_to_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/inbox/messages/m1/reply"))
            .and(body_json(json!({ "content": "Thanks!", "useTemplate": false })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": "r1" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let data = commands_for(&server).reply_to_message("m1", "Thanks!", false).await.unwrap();
        assert_eq!(data["id"], "r1");
    }

    #[tokio::test]
    async fn test_assign_message_uses_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/inbox/messages/m1/assign"))
            .and(body_json(json!({ "userId": "u7" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
            .expect(1)
            .mount(&server)
            .await;

        let data = commands_for(&server).assign_message("m1", "u7").await.unwrap();
        assert!(data.is_null());
    }
}
