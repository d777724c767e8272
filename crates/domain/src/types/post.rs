//! Post and media payloads

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use super::query::{QueryPairs, QueryParams};
use crate::constants::DEFAULT_POSTS_LIMIT;
use crate::errors::{AiSocialError, Result};

/// Lifecycle state of a post; assigned by the server
///
/// States this client does not know about are kept verbatim in
/// [`PostStatus::Other`], so a newer server never breaks decoding. Decoding is
/// exact; [`FromStr`] ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    /// Saved but not scheduled
    Draft,
    /// Waiting for `scheduledAt`
    Scheduled,
    /// Being sent to the platforms
    Publishing,
    /// Live on every targeted platform
    Published,
    /// Publishing failed
    Failed,
    /// Withdrawn before publishing
    Cancelled,
    /// Any other state reported by the server, exactly as sent
    Other(String),
}

impl PostStatus {
    /// Wire representation of this value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Publishing => "publishing",
            Self::Published => "published",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for PostStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "draft" => Self::Draft,
            "scheduled" => Self::Scheduled,
            "publishing" => Self::Publishing,
            "published" => Self::Published,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(status),
        }
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s.to_lowercase()))
    }
}

/// Kind of media attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Animated GIF
    Gif,
}

crate::impl_wire_enum_conversions!(MediaType {
    Image => "image",
    Video => "video",
    Gif => "gif",
});

/// Media attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Publicly reachable media URL
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Preview image for videos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Media {
    /// Attachment without a thumbnail
    pub fn new(url: impl Into<String>, media_type: MediaType) -> Self {
        Self { url: url.into(), media_type, thumbnail_url: None }
    }

    /// Set the preview image
    #[must_use]
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

/// A social media post
///
/// `id` and `status` are server-controlled and normally left empty when
/// creating a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Post body
    pub content: String,
    /// Platform identifiers (e.g. `"twitter"`, `"linkedin"`)
    pub platforms: Vec<String>,
    /// Publish time; unscheduled when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Attachments, in display order
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
    /// Free-form per-platform overrides keyed by platform identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_customizations: Option<BTreeMap<String, Value>>,
    /// Lifecycle state reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    /// Server-assigned fields without a typed counterpart (timestamps,
    /// owner ids, ...), kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Create an unscheduled post for the given platforms
    pub fn new<I, S>(content: impl Into<String>, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            content: content.into(),
            platforms: platforms.into_iter().map(Into::into).collect(),
            scheduled_at: None,
            media: Vec::new(),
            platform_customizations: None,
            status: None,
            extra: Map::new(),
        }
    }

    /// Schedule the post
    #[must_use]
    pub fn scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    /// Append an attachment
    #[must_use]
    pub fn with_media(mut self, media: Media) -> Self {
        self.media.push(media);
        self
    }

    /// Override fields for one platform
    #[must_use]
    pub fn customize_platform(mut self, platform: impl Into<String>, overrides: Value) -> Self {
        self.platform_customizations
            .get_or_insert_with(BTreeMap::new)
            .insert(platform.into(), overrides);
        self
    }

    /// Check the invariants that hold regardless of server-side rules
    ///
    /// # Errors
    ///
    /// Returns `AiSocialError::InvalidInput` if the content is blank or no
    /// platform is targeted.
    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(AiSocialError::InvalidInput("post content must not be empty".into()));
        }
        if self.platforms.is_empty() {
            return Err(AiSocialError::InvalidInput(
                "post must target at least one platform".into(),
            ));
        }
        Ok(())
    }
}

/// Partial update for an existing post; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<Media>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_customizations: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

impl PostUpdate {
    /// Whether no field would be sent
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Body of the bulk-create endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BulkPostsRequest<'a> {
    /// Posts to create, validated locally first
    pub posts: &'a [Post],
}

/// Filters for listing posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPostsParams {
    pub status: Option<PostStatus>,
    pub platform: Option<String>,
    pub limit: Option<u32>,
    /// Opaque cursor from a previous page, passed back verbatim
    pub cursor: Option<String>,
}

impl Default for ListPostsParams {
    fn default() -> Self {
        Self { status: None, platform: None, limit: Some(DEFAULT_POSTS_LIMIT), cursor: None }
    }
}

impl ListPostsParams {
    /// Only posts in this state
    #[must_use]
    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Only posts targeting this platform
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

impl QueryParams for ListPostsParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .push_opt("status", self.status.as_ref())
            .push_opt("platform", self.platform.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref())
            .into_vec()
    }
}
