//! Ollama embedding provider.
//!
//! Calls `POST {endpoint}/api/embeddings` with `{model, prompt}` and expects
//! `{embedding: [f32]}` back. One `reqwest::Client` is reused for all calls.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{EmbeddingsProvider, check_dim};
use crate::config::EmbeddingConfig;
use crate::errors::SearchError;

#[derive(Debug, Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OllamaEmbedResponse {
    embedding: Vec<f32>,
}

/// Ollama embedding provider (async).
pub struct OllamaEmbedder {
    client: reqwest::Client,
    url: String,
    model: String,
    dim: Option<usize>,
}

impl OllamaEmbedder {
    /// Construct a new embedder from configuration.
    ///
    /// # Errors
    /// Returns `SearchError::Embedding` if the HTTP client cannot be built.
    pub fn new(cfg: &EmbeddingConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| SearchError::Embedding(format!("http client build: {e}")))?;

        Ok(Self {
            client,
            url: embeddings_url(&cfg.endpoint),
            model: cfg.model.clone(),
            dim: cfg.dim,
        })
    }

    #[instrument(skip_all, fields(model = %self.model, chars = text.chars().count()))]
    async fn embed_one(&self, text: &str) -> Result<Vec<f32>, SearchError> {
        let req = OllamaEmbedRequest {
            model: &self.model,
            prompt: text,
        };

        let resp = self
            .client
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .map_err(|e| SearchError::Embedding(format!("POST {}: {e}", self.url)))?;

        if resp.status() != StatusCode::OK {
            let code = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".into());
            return Err(SearchError::Embedding(format!(
                "ollama embeddings non-200: {code}; body: {}",
                snippet(&body)
            )));
        }

        let parsed: OllamaEmbedResponse = resp
            .json()
            .await
            .map_err(|e| SearchError::Embedding(format!("parse embeddings json: {e}")))?;

        if parsed.embedding.is_empty() {
            return Err(SearchError::Embedding("empty embedding response".into()));
        }
        check_dim(&parsed.embedding, self.dim)?;

        debug!(dim = parsed.embedding.len(), "query embedded");
        Ok(parsed.embedding)
    }
}

impl EmbeddingsProvider for OllamaEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<f32>, SearchError>> + Send + 'a>,
    > {
        Box::pin(self.embed_one(text))
    }
}

fn embeddings_url(endpoint: &str) -> String {
    format!("{}/api/embeddings", endpoint.trim().trim_end_matches('/'))
}

/// First 200 chars of an error body, for log-friendly messages.
fn snippet(body: &str) -> String {
    body.trim().chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_normalized() {
        assert_eq!(
            embeddings_url("http://localhost:11434/"),
            "http://localhost:11434/api/embeddings"
        );
        assert_eq!(
            embeddings_url(" http://ollama:11434 "),
            "http://ollama:11434/api/embeddings"
        );
    }

    #[test]
    fn request_and_response_shapes() {
        let body = serde_json::to_value(OllamaEmbedRequest {
            model: "bge-m3",
            prompt: "alpha",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"model": "bge-m3", "prompt": "alpha"}));

        let parsed: OllamaEmbedResponse =
            serde_json::from_str(r#"{"embedding":[0.5,-1.0,2.25]}"#).unwrap();
        assert_eq!(parsed.embedding, vec![0.5, -1.0, 2.25]);
    }

    #[test]
    fn snippet_is_bounded() {
        let long = "x".repeat(1000);
        assert_eq!(snippet(&long).len(), 200);
        assert_eq!(snippet("  short  "), "short");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_embedding_error() {
        let cfg = EmbeddingConfig {
            endpoint: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..Default::default()
        };
        let embedder = OllamaEmbedder::new(&cfg).unwrap();
        let err = embedder.embed("alpha").await.unwrap_err();
        assert!(matches!(err, SearchError::Embedding(_)));
    }
}
