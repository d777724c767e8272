//! Unified inbox payloads

use serde::{Deserialize, Serialize};

use super::query::{QueryPairs, QueryParams};
use crate::constants::DEFAULT_INBOX_LIMIT;

/// Filters for listing inbox messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxMessagesParams {
    pub status: Option<String>,
    pub platform: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl Default for InboxMessagesParams {
    fn default() -> Self {
        Self { status: None, platform: None, limit: Some(DEFAULT_INBOX_LIMIT), cursor: None }
    }
}

impl InboxMessagesParams {
    /// Only messages in this state (e.g. `"unread"`)
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Only messages from this platform
    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a previous page's cursor
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl QueryParams for InboxMessagesParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .push_opt("status", self.status.as_deref())
            .push_opt("platform", self.platform.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref())
            .into_vec()
    }
}

/// Body of a message reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub content: String,
    pub use_template: bool,
}

/// Body of a message assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub user_id: String,
}

/// Reusable canned reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTemplate {
    pub name: String,
    pub content: String,
    pub category: String,
}
