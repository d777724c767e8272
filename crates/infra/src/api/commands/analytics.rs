use aisocial_domain::{AnalyticsQuery, ReportConfig};
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use super::{endpoint, resource_path, ApiCommands};
use crate::api::client::NO_BODY;
use crate::api::errors::ApiError;

impl ApiCommands {
    // === Analytics Operations ===

    /// Account-wide performance overview
    ///
    /// With `None` no filters are sent and the server applies its defaults.
    #[instrument(skip(self))]
    pub async fn get_analytics_overview(
        &self,
        query: Option<&AnalyticsQuery>,
    ) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::GET, &endpoint("/analytics/overview"), &query, NO_BODY)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_post_analytics(&self, post_id: &str) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::GET, &resource_path("/analytics/posts", post_id), &(), NO_BODY)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_audience_analytics(&self) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::GET, &endpoint("/analytics/audience"), &(), NO_BODY)
            .await
    }

    /// Request a report; the payload describes the generated document
    #[instrument(skip_all, fields(name = %config.name, format = %config.format))]
    pub async fn generate_report(&self, config: &ReportConfig) -> Result<Value, ApiError> {
        self.client
            .request_data(Method::POST, &endpoint("/analytics/reports"), &(), Some(config))
            .await
    }
}
