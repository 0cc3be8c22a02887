//! Configuration layer: reads runtime settings from environment variables
//! and exposes strongly typed configs for Qdrant and query embeddings.
//!
//! Everything here is built once at startup and treated as read-only.

use crate::errors::SearchError;

/// Collection queried when `QDRANT_COLLECTION` is not set.
pub const DEFAULT_COLLECTION: &str = "search_data";

/// Number of matches requested per search.
pub const RESULT_LIMIT: u64 = 5;

/// Model loaded by the `fastembed` backend when `EMBEDDING_MODEL` is not set.
pub const DEFAULT_FASTEMBED_MODEL: &str = "BAAI/bge-small-en-v1.5";

/// Named vector that Qdrant's fastembed helpers store for `model`:
/// `fast-` plus the lowercased name after the last `/`.
///
/// `BAAI/bge-small-en` -> `fast-bge-small-en`
pub fn fastembed_vector_name(model: &str) -> String {
    let short = model.trim().rsplit('/').next().unwrap_or_default();
    format!("fast-{}", short.to_lowercase())
}

/// Backend used to turn query text into a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingBackend {
    /// Remote `POST /api/embeddings` on an Ollama server.
    Ollama,
    /// In-process ONNX model (requires the `fastembed` feature).
    FastEmbed,
}

impl EmbeddingBackend {
    /// Parse from env string (case-insensitive).
    fn parse(key: &str, value: &str) -> Result<Self, SearchError> {
        match value.trim().to_lowercase().as_str() {
            "ollama" => Ok(EmbeddingBackend::Ollama),
            "fastembed" | "fast-embed" => Ok(EmbeddingBackend::FastEmbed),
            _ => Err(SearchError::EnvParse {
                key: key.into(),
                value: value.into(),
            }),
        }
    }
}

/// Qdrant connectivity and collection parameters.
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    /// gRPC URL for Qdrant (e.g., "http://localhost:6334").
    pub url: String,
    /// API key for Qdrant Cloud, if any.
    pub api_key: Option<String>,
    /// Collection the gateway searches.
    pub collection: String,
    /// Named vector to search; `None` uses the collection's default vector.
    pub vector_name: Option<String>,
}

/// Query embedding configuration.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub backend: EmbeddingBackend,
    /// Ollama base URL (ignored by the local backend).
    pub endpoint: String,
    /// Embedding model identifier (e.g., "bge-m3").
    pub model: String,
    /// Expected vector length; `None` skips the check.
    pub dim: Option<usize>,
    /// HTTP timeout for one embedding call.
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: EmbeddingBackend::Ollama,
            endpoint: "http://localhost:11434".to_string(),
            model: "bge-m3".to_string(),
            dim: None,
            timeout_secs: 60,
        }
    }
}

/// Top-level configuration for the search backend.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub qdrant: QdrantConfig,
    pub embedding: EmbeddingConfig,
}

impl SearchConfig {
    /// Creates a config for the given Qdrant endpoint with every other value defaulted.
    pub fn new_default(url: impl Into<String>) -> Self {
        Self {
            qdrant: QdrantConfig {
                url: url.into(),
                api_key: None,
                collection: DEFAULT_COLLECTION.to_string(),
                vector_name: None,
            },
            embedding: EmbeddingConfig::default(),
        }
    }

    /// Build configuration from settings read through `lookup`
    /// (`std::env::var` in production).
    ///
    /// Keys used:
    /// - `QDRANT_URL` (required)
    /// - `QDRANT_API_KEY` (optional)
    /// - `QDRANT_COLLECTION` (default: "search_data")
    /// - `QDRANT_VECTOR_NAME` (optional; derived from the model for `fastembed`)
    /// - `EMBEDDING_PROVIDER` ("ollama" | "fastembed"; default: "ollama")
    /// - `OLLAMA_URL` (default: "http://localhost:11434")
    /// - `EMBEDDING_MODEL` (default: "bge-m3", or "BAAI/bge-small-en-v1.5" for `fastembed`)
    /// - `EMBEDDING_DIM` (optional)
    /// - `EMBEDDING_TIMEOUT_SECS` (default: 60)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SearchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };

        let mut cfg = Self::new_default(env.required("QDRANT_URL")?);
        cfg.qdrant.api_key = env.optional("QDRANT_API_KEY");
        if let Some(collection) = env.optional("QDRANT_COLLECTION") {
            cfg.qdrant.collection = collection;
        }
        cfg.qdrant.vector_name = env.optional("QDRANT_VECTOR_NAME");

        if let Some(raw) = env.optional("EMBEDDING_PROVIDER") {
            cfg.embedding.backend = EmbeddingBackend::parse("EMBEDDING_PROVIDER", &raw)?;
        }
        if let Some(endpoint) = env.optional("OLLAMA_URL") {
            cfg.embedding.endpoint = endpoint;
        }
        match env.optional("EMBEDDING_MODEL") {
            Some(model) => cfg.embedding.model = model,
            None if cfg.embedding.backend == EmbeddingBackend::FastEmbed => {
                cfg.embedding.model = DEFAULT_FASTEMBED_MODEL.to_string();
            }
            None => {}
        }
        if cfg.qdrant.vector_name.is_none() && cfg.embedding.backend == EmbeddingBackend::FastEmbed
        {
            cfg.qdrant.vector_name = Some(fastembed_vector_name(&cfg.embedding.model));
        }
        cfg.embedding.dim = env.parsed::<usize>("EMBEDDING_DIM")?;
        if let Some(secs) = env.parsed::<u64>("EMBEDDING_TIMEOUT_SECS")? {
            cfg.embedding.timeout_secs = secs;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), SearchError> {
        validate_http_url("QDRANT_URL", &self.qdrant.url)?;
        if self.qdrant.collection.trim().is_empty() {
            return Err(SearchError::Config("collection is empty".into()));
        }
        if self.embedding.backend == EmbeddingBackend::Ollama {
            validate_http_url("OLLAMA_URL", &self.embedding.endpoint)?;
        }
        if self.embedding.model.trim().is_empty() {
            return Err(SearchError::Config("EMBEDDING_MODEL is empty".into()));
        }
        if self.embedding.dim == Some(0) {
            return Err(SearchError::Config("EMBEDDING_DIM must be > 0".into()));
        }
        Ok(())
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<(), SearchError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(SearchError::Config(format!(
            "{key} must start with http:// or https:// (got '{value}')"
        )))
    }
}

/// Typed access to string-valued settings; blank values count as unset.
struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, key: &str) -> Result<String, SearchError> {
        self.optional(key)
            .ok_or_else(|| SearchError::EnvMissing { key: key.into() })
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, SearchError> {
        match self.optional(key) {
            Some(v) => v
                .parse::<T>()
                .map(Some)
                .map_err(|_| SearchError::EnvParse {
                    key: key.into(),
                    value: v,
                }),
            None => Ok(None),
        }
    }
}
