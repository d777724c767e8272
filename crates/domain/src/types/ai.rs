//! AI content generation payloads

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HASHTAG_COUNT, DEFAULT_STRATEGY_TIMEFRAME};

/// Writing tone for generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Polished, business register
    Professional,
    /// Relaxed, conversational
    Casual,
    /// Warm and approachable
    Friendly,
    /// Strict formal register
    Formal,
    /// Playful
    Humorous,
}

crate::impl_wire_enum_conversions!(Tone {
    Professional => "professional",
    Casual => "casual",
    Friendly => "friendly",
    Formal => "formal",
    Humorous => "humorous",
});

/// Request body for `POST /ai/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiGenerateRequest {
    /// What to write about
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    /// Number of alternative drafts to produce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hashtags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_voice_id: Option<String>,
}

impl AiGenerateRequest {
    /// Request with server defaults for everything but the prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            tone: None,
            platforms: None,
            variations: None,
            include_hashtags: None,
            brand_voice_id: None,
        }
    }

    /// Writing tone
    #[must_use]
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Target platforms
    #[must_use]
    pub fn platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }

    /// Number of drafts
    #[must_use]
    pub fn variations(mut self, count: u32) -> Self {
        self.variations = Some(count);
        self
    }

    /// Whether drafts carry hashtags
    #[must_use]
    pub fn include_hashtags(mut self, include: bool) -> Self {
        self.include_hashtags = Some(include);
        self
    }

    /// Saved brand voice to imitate
    #[must_use]
    pub fn brand_voice(mut self, brand_voice_id: impl Into<String>) -> Self {
        self.brand_voice_id = Some(brand_voice_id.into());
        self
    }
}

/// Request body for `POST /ai/optimize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeContentRequest {
    pub content: String,
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_goals: Option<Vec<String>>,
}

/// Request body for `POST /ai/hashtags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagRequest {
    pub content: String,
    pub platform: String,
    pub count: u32,
}

impl HashtagRequest {
    /// Request for the default number of hashtags
    pub fn new(content: impl Into<String>, platform: impl Into<String>) -> Self {
        Self { content: content.into(), platform: platform.into(), count: DEFAULT_HASHTAG_COUNT }
    }
}

/// Request body for `POST /ai/strategy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub goals: Vec<String>,
    pub platforms: Vec<String>,
    /// Planning horizon, e.g. `"30_days"`
    pub timeframe: String,
}

impl StrategyRequest {
    /// Request over the default timeframe
    pub fn new(goals: Vec<String>, platforms: Vec<String>) -> Self {
        Self { goals, platforms, timeframe: DEFAULT_STRATEGY_TIMEFRAME.to_string() }
    }
}
