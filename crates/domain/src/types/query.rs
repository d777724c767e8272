//! Query-string rendering for parameter bundles
//!
//! Parameter bundles render to ordered key/value pairs. Only parameters that
//! are present are emitted; list-valued parameters repeat their key.

/// A bundle of URL query parameters
pub trait QueryParams: Send + Sync {
    /// Render the parameters that are present, in a stable order
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Accumulator used by [`QueryParams`] implementations
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Always emit `key`
    #[must_use]
    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Emit `key` only when `value` is present
    #[must_use]
    pub fn push_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Emit `key` once per element
    #[must_use]
    pub fn push_each<V: ToString>(mut self, key: &'static str, values: &[V]) -> Self {
        self.0.extend(values.iter().map(|v| (key, v.to_string())));
        self
    }

    /// Pairs in insertion order
    pub fn into_vec(self) -> Vec<(&'static str, String)> {
        self.0
    }
}

impl QueryParams for () {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl<T: QueryParams + ?Sized> QueryParams for &T {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        (**self).query_pairs()
    }
}

impl<T: QueryParams> QueryParams for Option<T> {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.as_ref().map(QueryParams::query_pairs).unwrap_or_default()
    }
}
