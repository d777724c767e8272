use aisocial_domain::{BulkPostsRequest, ListPostsParams, Page, Post, PostUpdate};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{action_path, endpoint, resource_path, ApiCommands};
use crate::api::client::NO_BODY;
use crate::api::errors::ApiError;

const POSTS: &str = "/posts";

impl ApiCommands {
    // === Post Operations ===

    /// Create a new post
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` without sending anything if the post has
    /// blank content or no platforms; otherwise the normalized API error.
    #[instrument(skip(self, post), fields(platforms = post.platforms.len()))]
    pub async fn create_post(&self, post: &Post) -> Result<Post, ApiError> {
        post.validate()?;

        let created: Post =
            self.client.request_data(Method::POST, &endpoint(POSTS), &(), Some(post)).await?;

        debug!(post_id = ?created.id, "Post created");
        Ok(created)
    }

    /// Get a post by ID
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: &str) -> Result<Post, ApiError> {
        self.client.request_data(Method::GET, &resource_path(POSTS, post_id), &(), NO_BODY).await
    }

    /// List posts, returning the full envelope so the caller can follow the
    /// cursor
    #[instrument(skip(self))]
    pub async fn list_posts(&self, params: &ListPostsParams) -> Result<Page<Post>, ApiError> {
        let page: Page<Post> =
            self.client.request_json(Method::GET, &endpoint(POSTS), params, NO_BODY).await?;

        debug!(count = page.len(), has_more = page.has_more(), "Posts listed");
        Ok(page)
    }

    /// Apply a partial update to a post
    #[instrument(skip(self, updates))]
    pub async fn update_post(&self, post_id: &str, updates: &PostUpdate) -> Result<Post, ApiError> {
        self.client
            .request_data(Method::PUT, &resource_path(POSTS, post_id), &(), Some(updates))
            .await
    }

    /// Delete a post
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: &str) -> Result<(), ApiError> {
        self.client.request_unit(Method::DELETE, &resource_path(POSTS, post_id)).await?;
        debug!("Post deleted");
        Ok(())
    }

    /// Publish a post immediately
    #[instrument(skip(self))]
    pub async fn publish_post(&self, post_id: &str) -> Result<Post, ApiError> {
        self.client
            .request_data(Method::POST, &action_path(POSTS, post_id, "publish"), &(), NO_BODY)
            .await
    }

    /// Create several posts in one call
    ///
    /// The batch succeeds or fails as a whole, exactly as the server reports.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if any post fails local validation.
    #[instrument(skip(self, posts), fields(count = posts.len()))]
    pub async fn bulk_create_posts(&self, posts: &[Post]) -> Result<Value, ApiError> {
        for post in posts {
            post.validate()?;
        }

        let body = BulkPostsRequest { posts };
        self.client.request_data(Method::POST, &endpoint("/posts/bulk"), &(), Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aisocial_domain::PostStatus;
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
    async fn test_create_post_returns_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/posts"))
            .and(body_json(json!({ "content": "Hello", "platforms": ["twitter"] })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": { "id": "p1", "content": "Hello", "platforms": ["twitter"], "status": "draft" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let post = commands_for(&server).create_post(&Post::new("Hello", ["twitter"])).await.unwrap();

        assert_eq!(post.id.as_deref(), Some("p1"));
        assert_eq!(post.status, Some(PostStatus::Draft));
    }

    #[tokio::test]
    async fn test_create_invalid_post_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let err = commands_for(&server).create_post(&Post::new("", ["twitter"])).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.status_code(), 0);
    }

    #[tokio::test]
    async fn test_update_post_sends_partial_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/posts/p1"))
            .and(body_json(json!({ "content": "edited" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": "p1", "content": "edited", "platforms": ["twitter"] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let updates = PostUpdate { content: Some("edited".into()), ..Default::default() };
        let post = commands_for(&server).update_post("p1", &updates).await.unwrap();
        assert_eq!(post.content, "edited");
    }

    #[tokio::test]
    async fn test_publish_post() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/posts/p1/publish"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": "p1", "content": "c", "platforms": ["x"], "status": "published" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let post = commands_for(&server).publish_post("p1").await.unwrap();
        assert_eq!(post.status, Some(PostStatus::Published));
    }

    #[tokio::test]
    async fn test_bulk_create_wraps_posts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/posts/bulk"))
            .and(body_json(json!({
                "posts": [
                    { "content": "a", "platforms": ["twitter"] },
                    { "content": "b", "platforms": ["linkedin"] }
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "created": 2 } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let posts = vec![Post::new("a", ["twitter"]), Post::new("b", ["linkedin"])];
        let result = commands_for(&server).bulk_create_posts(&posts).await.unwrap();
        assert_eq!(result, json!({ "created": 2 }));
    }

    #[tokio::test]
    async fn test_bulk_create_surfaces_single_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/posts/bulk"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "message": "Too many posts", "code": "BATCH_TOO_LARGE" }
            })))
            .mount(&server)
            .await;

        let posts = vec![Post::new("a", ["twitter"])];
        let err = commands_for(&server).bulk_create_posts(&posts).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), Some("BATCH_TOO_LARGE"));
    }

    #[tokio::test]
    async fn test_list_posts_keeps_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": "p1", "content": "c", "platforms": ["x"] }],
                "nextCursor": "cur-2"
            })))
            .mount(&server)
            .await;

        let page = commands_for(&server).list_posts(&ListPostsParams::default()).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.next_cursor(), Some("cur-2"));
    }
}
