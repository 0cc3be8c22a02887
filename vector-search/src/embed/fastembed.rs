//! In-process embeddings via `fastembed` (ONNX runtime).
//!
//! The model is loaded once; inference runs on tokio's blocking pool.

use std::sync::Arc;

use ::fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use super::{EmbeddingsProvider, check_dim};
use crate::config::EmbeddingConfig;
use crate::errors::SearchError;

pub struct FastEmbedder {
    model: Arc<TextEmbedding>,
    dim: Option<usize>,
}

/// Model selected by `EMBEDDING_MODEL`, with its native vector length.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedModel {
    pub model: EmbeddingModel,
    pub code: String,
    pub dim: usize,
}

/// Maps a model code (`BAAI/bge-small-en-v1.5`) or its short name
/// (`bge-small-en-v1.5`) to a supported model, ignoring case.
pub(crate) fn resolve_model(name: &str) -> Result<ResolvedModel, SearchError> {
    let wanted = name.trim().to_lowercase();
    TextEmbedding::list_supported_models()
        .into_iter()
        .find(|info| {
            let code = info.model_code.to_lowercase();
            code == wanted || code.rsplit('/').next() == Some(wanted.as_str())
        })
        .map(|info| ResolvedModel {
            model: info.model,
            code: info.model_code,
            dim: info.dim,
        })
        .ok_or_else(|| {
            SearchError::Config(format!(
                "EMBEDDING_MODEL '{name}' is not a supported fastembed model"
            ))
        })
}

impl FastEmbedder {
    /// Loads the model named by `cfg.model`, downloading it on first use.
    pub fn new(cfg: &EmbeddingConfig) -> Result<Self, SearchError> {
        let resolved = resolve_model(&cfg.model)?;
        if let Some(want) = cfg.dim.filter(|want| *want != resolved.dim) {
            return Err(SearchError::Config(format!(
                "EMBEDDING_DIM={want} but {} produces {} dimensions",
                resolved.code, resolved.dim
            )));
        }

        let model = TextEmbedding::try_new(
            InitOptions::new(resolved.model).with_show_download_progress(false),
        )
        .map_err(|e| SearchError::Embedding(format!("fastembed init: {e}")))?;

        info!(model = %resolved.code, dim = resolved.dim, "fastembed model loaded");
        Ok(Self {
            model: Arc::new(model),
            dim: Some(resolved.dim),
        })
    }
}

impl EmbeddingsProvider for FastEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<f32>, SearchError>> + Send + 'a>,
    > {
        let model = Arc::clone(&self.model);
        let text = text.to_string();
        Box::pin(async move {
            let mut vectors = tokio::task::spawn_blocking(move || model.embed(vec![text], None))
                .await
                .map_err(|e| SearchError::Embedding(format!("embedding task: {e}")))?
                .map_err(|e| SearchError::Embedding(format!("fastembed: {e}")))?;

            let vector = vectors
                .pop()
                .ok_or_else(|| SearchError::Embedding("empty embedding response".into()))?;
            check_dim(&vector, self.dim)?;
            Ok(vector)
        })
    }
}
