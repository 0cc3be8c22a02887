//! Filtered semantic search over a Qdrant collection.
//!
//! This crate provides:
//! - Typed configuration read once from the environment
//! - Query embedding (Ollama over HTTP, or a local model behind the `fastembed` feature)
//! - A single nearest-neighbour query with one `must` equality filter
//! - Projection of Qdrant points into [`RawMatch`] records
//!
//! [`VectorSearch`] is the seam the HTTP layer depends on; [`QdrantSearch`]
//! is the production implementation.

mod config;
mod embed;
mod errors;
mod filters;
mod qdrant_facade;
mod record;
mod retrieve;

pub use config::{
    DEFAULT_COLLECTION, DEFAULT_FASTEMBED_MODEL, EmbeddingBackend, EmbeddingConfig, QdrantConfig,
    RESULT_LIMIT, SearchConfig, fastembed_vector_name,
};
pub use embed::EmbeddingsProvider;
pub use embed::ollama::OllamaEmbedder;
pub use errors::SearchError;
pub use record::{MatchFilter, RawMatch, SearchQuery, VectorSearch};

use std::{future::Future, pin::Pin};

use tracing::{debug, trace};

/// Production [`VectorSearch`]: embeds the query text, then queries Qdrant.
///
/// Built once at startup and shared by all requests.
pub struct QdrantSearch {
    client: qdrant_facade::QdrantFacade,
    embedder: Box<dyn EmbeddingsProvider>,
}

impl QdrantSearch {
    /// Constructs the Qdrant client and the configured embedding provider.
    ///
    /// # Errors
    /// Returns `SearchError::Qdrant` if the client cannot be built, or a
    /// config/embedding error if the provider cannot be initialized.
    pub fn new(cfg: &SearchConfig) -> Result<Self, SearchError> {
        let embedder = embed::from_config(&cfg.embedding)?;
        Self::with_embedder(cfg, embedder)
    }

    /// Same as [`QdrantSearch::new`] with a caller-supplied embedding provider.
    pub fn with_embedder(
        cfg: &SearchConfig,
        embedder: Box<dyn EmbeddingsProvider>,
    ) -> Result<Self, SearchError> {
        cfg.validate()?;
        trace!("QdrantSearch::new collection={}", cfg.qdrant.collection);
        let client = qdrant_facade::QdrantFacade::new(&cfg.qdrant)?;
        Ok(Self { client, embedder })
    }
}

impl VectorSearch for QdrantSearch {
    fn query<'a>(
        &'a self,
        query: SearchQuery<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawMatch>, SearchError>> + Send + 'a>> {
        Box::pin(async move {
            let vector = self.embedder.embed(query.text).await?;
            let filter = filters::to_qdrant_filter(&query.filter);

            let points = self
                .client
                .query_nearest(query.collection, vector, query.limit, filter)
                .await?;

            let matches: Vec<RawMatch> = points
                .into_iter()
                .map(retrieve::scored_point_to_match)
                .collect();

            debug!(
                collection = query.collection,
                hits = matches.len(),
                "QdrantSearch::query done"
            );
            Ok(matches)
        })
    }
}
