//! Analytics queries and report configuration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::query::{QueryPairs, QueryParams};

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day
    pub start: NaiveDate,
    /// Last day, inclusive
    pub end: NaiveDate,
}

impl DateRange {
    /// Range from `start` to `end`
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Filters for the analytics overview, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,
}

impl AnalyticsQuery {
    /// Restrict the query to a date range
    pub fn for_range(range: DateRange) -> Self {
        Self { start_date: Some(range.start), end_date: Some(range.end), ..Self::default() }
    }
}

impl QueryParams for AnalyticsQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .push_opt("startDate", self.start_date)
            .push_opt("endDate", self.end_date)
            .push_each("platforms", &self.platforms)
            .push_each("metrics", &self.metrics)
            .into_vec()
    }
}

/// Output format of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// PDF document
    Pdf,
    /// Comma-separated values
    Csv,
    /// Excel workbook
    Excel,
}

crate::impl_wire_enum_conversions!(ReportFormat {
    Pdf => "pdf",
    Csv => "csv",
    Excel => "excel",
});

/// Request body for `POST /analytics/reports`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    pub name: String,
    pub date_range: DateRange,
    pub metrics: Vec<String>,
    pub platforms: Vec<String>,
    pub format: ReportFormat,
}
