use aisocial_domain::{AiGenerateRequest, HashtagRequest, OptimizeContentRequest, StrategyRequest};
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use super::{endpoint, ApiCommands};
use crate::api::errors::ApiError;

impl ApiCommands {
    // === AI Content Operations ===

    /// Generate draft content from a prompt
    #[instrument(skip_all, fields(tone = ?request.tone))]
    pub async fn generate_content(&self, request: &AiGenerateRequest) -> Result<Value, ApiError> {
        self.client.request_data(Method::POST, &endpoint("/ai/generate"), &(), Some(request)).await
    }

    /// Rewrite existing content for one platform
    #[instrument(skip_all, fields(platform = %request.platform))]
    pub async fn optimize_content(
        &self,
        request: &OptimizeContentRequest,
    ) -> Result<Value, ApiError> {
        self.client.request_data(Method::POST, &endpoint("/ai/optimize"), &(), Some(request)).await
    }

    /// Suggest hashtags for a piece of content
    #[instrument(skip_all, fields(platform = %request.platform, count = request.count))]
    pub async fn generate_hashtags(&self, request: &HashtagRequest) -> Result<Value, ApiError> {
        self.client.request_data(Method::POST, &endpoint("/ai/hashtags"), &(), Some(request)).await
    }

    /// Ask for a content strategy covering the given goals and platforms
    #[instrument(skip_all, fields(timeframe = %request.timeframe))]
    pub async fn get_strategy_recommendations(
        &self,
        request: &StrategyRequest,
    ) -> Result<Value, ApiError> {
        self.client.request_data(Method::POST, &endpoint("/ai/strategy"), &(), Some(request)).await
    }
}
