use crate::config::{EmbeddingBackend, EmbeddingConfig};
use crate::errors::SearchError;
use std::{future::Future, pin::Pin};

/// Provider interface for query embedding.
///
/// Async because the usual backend is an HTTP call.
pub trait EmbeddingsProvider: Send + Sync {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, SearchError>> + Send + 'a>>;
}

#[cfg(feature = "fastembed")]
pub mod fastembed;
pub mod ollama;

/// Builds the provider selected by `cfg.backend`.
pub fn from_config(cfg: &EmbeddingConfig) -> Result<Box<dyn EmbeddingsProvider>, SearchError> {
    match cfg.backend {
        EmbeddingBackend::Ollama => Ok(Box::new(ollama::OllamaEmbedder::new(cfg)?)),
        #[cfg(feature = "fastembed")]
        EmbeddingBackend::FastEmbed => Ok(Box::new(fastembed::FastEmbedder::new(cfg)?)),
        #[cfg(not(feature = "fastembed"))]
        EmbeddingBackend::FastEmbed => Err(SearchError::Config(
            "EMBEDDING_PROVIDER=fastembed requires the `fastembed` feature".into(),
        )),
    }
}

/// Rejects vectors whose length differs from `want`, when a length is configured.
pub(crate) fn check_dim(vector: &[f32], want: Option<usize>) -> Result<(), SearchError> {
    match want {
        Some(want) if vector.len() != want => Err(SearchError::VectorSizeMismatch {
            got: vector.len(),
            want,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_check() {
        assert!(check_dim(&[0.1, 0.2], None).is_ok());
        assert!(check_dim(&[0.1, 0.2], Some(2)).is_ok());
        assert!(matches!(
            check_dim(&[0.1, 0.2], Some(3)),
            Err(SearchError::VectorSizeMismatch { got: 2, want: 3 })
        ));
    }

    #[cfg(not(feature = "fastembed"))]
    #[test]
    fn fastembed_without_feature_is_a_config_error() {
        let cfg = EmbeddingConfig {
            backend: EmbeddingBackend::FastEmbed,
            ..Default::default()
        };
        let err = from_config(&cfg).err().expect("must fail");
        assert!(err.is_config());
    }
}
