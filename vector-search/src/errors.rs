//! Unified error type for the vector-search crate.

use thiserror::Error;

/// Errors produced while configuring or running a search.
#[derive(Debug, Error)]
pub enum SearchError {
    // ── Configuration / environment ──────────────────────────────────────────
    /// Required environment variable is missing or empty.
    #[error("missing env variable: {key}")]
    EnvMissing { key: String },

    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },

    /// Configuration combination is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    // ── Qdrant client / transport ───────────────────────────────────────────
    /// Transport or server error reported by Qdrant.
    #[error("qdrant error: {0}")]
    Qdrant(String),

    // ── Embeddings backend ──────────────────────────────────────────────────
    /// Embedding backend failed to initialize or to embed the query.
    #[error("embedding error: {0}")]
    Embedding(String),

    /// The embedding backend returned a vector of unexpected length.
    #[error("vector size mismatch: got {got}, want {want}")]
    VectorSizeMismatch { got: usize, want: usize },
}

impl SearchError {
    /// `true` for errors raised before any request is served.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SearchError::EnvMissing { .. } | SearchError::EnvParse { .. } | SearchError::Config(_)
        )
    }
}
