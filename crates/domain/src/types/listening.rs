//! Social listening payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::query::{QueryPairs, QueryParams};
use crate::constants::DEFAULT_MENTIONS_LIMIT;

/// Definition of a listening query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningQuery {
    pub name: String,
    pub keywords: Vec<String>,
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Vec<String>>,
}

/// Cursor-paginated mention lookup for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionsParams {
    pub query_id: String,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl MentionsParams {
    /// First page with the default page size
    pub fn new(query_id: impl Into<String>) -> Self {
        Self { query_id: query_id.into(), limit: Some(DEFAULT_MENTIONS_LIMIT), cursor: None }
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

impl QueryParams for MentionsParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .push("queryId", &self.query_id)
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref())
            .into_vec()
    }
}

/// Sentiment breakdown for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentParams {
    pub query_id: String,
    pub start_date: Option<NaiveDate>,
}

impl SentimentParams {
    /// Breakdown over the server's default window
    pub fn new(query_id: impl Into<String>) -> Self {
        Self { query_id: query_id.into(), start_date: None }
    }

    /// Only mentions on or after this date
    #[must_use]
    pub fn since(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
}

impl QueryParams for SentimentParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .push("queryId", &self.query_id)
            .push_opt("startDate", self.start_date)
            .into_vec()
    }
}
