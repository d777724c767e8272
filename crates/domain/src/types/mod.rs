//! Payload types exchanged with the API
//!
//! Every type here is an ephemeral request or response shape. Field names are
//! camelCase on the wire; absent optional fields are omitted from request
//! bodies rather than sent as `null`.

pub mod account;
pub mod ai;
pub mod analytics;
pub mod auth;
pub mod envelope;
pub mod inbox;
pub mod listening;
pub mod post;
pub mod query;
pub mod webhook;

pub use account::ConnectAccountRequest;
pub use ai::{AiGenerateRequest, HashtagRequest, OptimizeContentRequest, StrategyRequest, Tone};
pub use analytics::{AnalyticsQuery, DateRange, ReportConfig, ReportFormat};
pub use auth::{AuthSession, LoginRequest, RefreshRequest};
pub use envelope::{Envelope, ErrorBody, ErrorEnvelope, Page};
pub use inbox::{AssignRequest, InboxMessagesParams, ReplyRequest, ReplyTemplate};
pub use listening::{ListeningQuery, MentionsParams, SentimentParams};
pub use post::{BulkPostsRequest, ListPostsParams, Media, MediaType, Post, PostStatus, PostUpdate};
pub use query::{QueryPairs, QueryParams};
pub use webhook::WebhookConfig;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default (e.g. an empty list)
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
