use aisocial_domain::{ListeningQuery, MentionsParams, Page, SentimentParams};
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use super::{endpoint, ApiCommands};
use crate::api::client::NO_BODY;
use crate::api::errors::ApiError;

impl ApiCommands {
    // === Social Listening Operations ===

    #[instrument(skip_all, fields(name = %query.name))]
    pub async fn create_listening_query(&self, query: &ListeningQuery) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::POST, &endpoint("/listening/queries"), &(), Some(query))
            .await
    }

    /// Mentions matched by a listening query, one page at a time
    #[instrument(skip(self))]
    pub async fn get_mentions(&self, params: &MentionsParams) -> Result<Page<Value>, ApiError> {
        self.client.request_json(Method::GET, &endpoint("/listening/mentions"), params, NO_BODY).await
    }

    #[instrument(skip(self))]
    pub async fn get_sentiment_analysis(&self, params: &SentimentParams) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::GET, &endpoint("/listening/sentiment"), params, NO_BODY)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_trending_topics(&self) -> Result<Value, ApiError> {
        self.client.request_data(Method::GET, &endpoint("/listening/trends"), &(), NO_BODY).await
    }
}
