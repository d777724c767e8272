//! Response envelopes
//!
//! Successful responses wrap their payload as `{ "data": ... }`; list
//! endpoints with cursor pagination put their metadata next to `data`.
//! Failures use `{ "error": { "message": ..., "code": ... } }`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Success envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Full envelope of a cursor-paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Everything the server sent besides `data` (cursor, totals, ...)
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl<T> Page<T> {
    /// Cursor for the next page, if the server returned one
    ///
    /// Looks for `nextCursor` at the top level, then inside a `pagination` or
    /// `meta` object.
    pub fn next_cursor(&self) -> Option<&str> {
        let top = self.meta.get("nextCursor");
        let nested = ["pagination", "meta"]
            .iter()
            .filter_map(|key| self.meta.get(*key))
            .find_map(|section| section.get("nextCursor"));

        top.or(nested).and_then(Value::as_str)
    }

    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Machine-readable error detail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Failure envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    /// Parse an error body leniently
    ///
    /// Bodies that are not JSON or do not match the envelope yield an empty
    /// [`ErrorBody`].
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_next_cursor_top_level() {
        let page: Page<Value> =
            serde_json::from_value(json!({ "data": [1, 2], "nextCursor": "c2" })).unwrap();
        assert_eq!(page.next_cursor(), Some("c2"));
        assert_eq!(page.len(), 2);
        assert!(page.has_more());
    }

    #[test]
    fn test_next_cursor_nested() {
        let page: Page<Value> = serde_json::from_value(json!({
            "data": [],
            "pagination": { "nextCursor": "abc", "total": 40 }
        }))
        .unwrap();
        assert_eq!(page.next_cursor(), Some("abc"));
        assert!(page.is_empty());
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let page: Page<Value> =
            serde_json::from_value(json!({ "data": [], "nextCursor": null })).unwrap();
        assert_eq!(page.next_cursor(), None);
        assert!(!page.has_more());
    }

    #[test]
    fn test_error_envelope_parsing() {
        let envelope = ErrorEnvelope::from_slice(
            br#"{"error":{"message":"Not found","code":"NOT_FOUND"}}"#,
        );
        assert_eq!(envelope.error.message.as_deref(), Some("Not found"));
        assert_eq!(envelope.error.code.as_deref(), Some("NOT_FOUND"));

        let envelope = ErrorEnvelope::from_slice(br#"{"error":{}}"#);
        assert_eq!(envelope.error, ErrorBody::default());

        let envelope = ErrorEnvelope::from_slice(b"<html>Bad Gateway</html>");
        assert_eq!(envelope.error, ErrorBody::default());
    }
}
