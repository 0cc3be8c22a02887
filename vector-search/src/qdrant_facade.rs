//! Thin adapter around `qdrant-client` to isolate API usage.
//!
//! This facade concentrates all Qdrant interactions behind a minimal API,
//! hiding away the verbose builder pattern and keeping the rest of the
//! application decoupled from `qdrant-client`.

use crate::config::QdrantConfig;
use crate::errors::SearchError;

use qdrant_client::Qdrant;
use qdrant_client::qdrant::{Filter, Query, QueryPoints, QueryPointsBuilder, ScoredPoint};
use tracing::{debug, info};

/// A facade over the Qdrant client.
///
/// The underlying gRPC client is cheap to share and safe for concurrent use,
/// so one facade serves every request for the life of the process.
pub struct QdrantFacade {
    client: Qdrant,
    vector_name: Option<String>,
}

impl QdrantFacade {
    /// Creates a new facade from the given configuration.
    ///
    /// Supports optional API key authentication. No network I/O happens here;
    /// the connection is established lazily on first use.
    pub fn new(cfg: &QdrantConfig) -> Result<Self, SearchError> {
        let mut builder = Qdrant::from_url(&cfg.url);
        if let Some(key) = &cfg.api_key {
            builder = builder.api_key(key.clone());
        }
        let client = builder
            .build()
            .map_err(|e| SearchError::Qdrant(format!("client build: {e}")))?;

        info!(
            url = %cfg.url,
            vector = cfg.vector_name.as_deref().unwrap_or("<default>"),
            "Qdrant client ready"
        );

        Ok(Self {
            client,
            vector_name: cfg.vector_name.clone(),
        })
    }

    /// Nearest-neighbour query with payload, restricted by `filter`.
    ///
    /// Returns scored points in the order Qdrant ranked them.
    pub async fn query_nearest(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: u64,
        filter: Filter,
    ) -> Result<Vec<ScoredPoint>, SearchError> {
        debug!(collection, limit, dim = vector.len(), "Querying nearest points");

        let request = build_query(
            collection,
            vector,
            limit,
            filter,
            self.vector_name.as_deref(),
        );

        let res = self
            .client
            .query(request)
            .await
            .map_err(|e| SearchError::Qdrant(format!("query_points: {e}")))?;

        debug!(hits = res.result.len(), "Query completed");
        Ok(res.result)
    }
}

/// Nearest-neighbour request with payload, searching `vector_name` when set.
pub(crate) fn build_query(
    collection: &str,
    vector: Vec<f32>,
    limit: u64,
    filter: Filter,
    vector_name: Option<&str>,
) -> QueryPoints {
    let mut builder = QueryPointsBuilder::new(collection)
        .query(Query::new_nearest(vector))
        .limit(limit)
        .filter(filter)
        .with_payload(true);

    if let Some(name) = vector_name {
        builder = builder.using(name);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RESULT_LIMIT;
    use crate::filters::to_qdrant_filter;
    use crate::record::MatchFilter;
    use qdrant_client::qdrant::with_payload_selector::SelectorOptions;

    fn request(vector_name: Option<&str>) -> QueryPoints {
        let filter = to_qdrant_filter(&MatchFilter::equals("content_type", "article"));
        build_query("search_data", vec![0.1, 0.2, 0.3], RESULT_LIMIT, filter, vector_name)
    }

    #[test]
    fn request_carries_collection_limit_payload_and_filter() {
        let q = request(None);

        assert_eq!(q.collection_name, "search_data");
        assert_eq!(q.limit, Some(5));
        assert!(q.query.is_some());
        assert!(matches!(
            q.with_payload.and_then(|w| w.selector_options),
            Some(SelectorOptions::Enable(true))
        ));
        assert_eq!(q.filter.map(|f| f.must.len()), Some(1));
        assert_eq!(q.using, None);
    }

    #[test]
    fn named_vector_is_used_when_configured() {
        let q = request(Some("fast-bge-small-en"));
        assert_eq!(q.using.as_deref(), Some("fast-bge-small-en"));
    }
}
