//! Core data models and the search seam used by the HTTP layer.

use std::{future::Future, pin::Pin};

use serde_json::{Map, Value};

use crate::errors::SearchError;

/// Payload key holding the document text.
pub const DOCUMENT_KEY: &str = "document";

/// One equality constraint (`key == value`) applied as a `must` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchFilter {
    pub key: String,
    pub value: String,
}

impl MatchFilter {
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parameters of a single text query.
#[derive(Clone, Debug)]
pub struct SearchQuery<'a> {
    pub collection: &'a str,
    pub text: &'a str,
    pub limit: u64,
    pub filter: MatchFilter,
}

/// A record as returned by the store, best match first.
#[derive(Clone, Debug, PartialEq)]
pub struct RawMatch {
    /// Point id: a JSON number for numeric ids, a string for UUIDs.
    pub id: Value,
    pub document: String,
    /// Every payload field except the document text.
    pub metadata: Map<String, Value>,
    pub score: f32,
}

/// Anything that can answer a filtered text query.
///
/// Implementations must return matches in relevance order and never more
/// than `query.limit` of them.
pub trait VectorSearch: Send + Sync {
    fn query<'a>(
        &'a self,
        query: SearchQuery<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawMatch>, SearchError>> + Send + 'a>>;
}
