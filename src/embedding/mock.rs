use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::error::EmbeddingError;
use super::provider::EmbeddingProvider;
use super::types::Embedding;

#[derive(Clone)]
enum MockResponse {
    Vector(Vec<f32>),
    Failure(String),
}

/// Table-driven [`EmbeddingProvider`] for tests.
///
/// Texts without a registered response get the zero vector of the configured dimension.
#[derive(Default)]
pub struct MockEmbedder {
    dim: usize,
    responses: HashMap<String, MockResponse>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    /// Returns `values` when asked to embed exactly `text`.
    pub fn with_vector(mut self, text: impl Into<String>, values: Vec<f32>) -> Self {
        self.responses
            .insert(text.into(), MockResponse::Vector(values));
        self
    }

    /// Fails with [`EmbeddingError::InferenceFailed`] when asked to embed `text`.
    pub fn with_failure(mut self, text: impl Into<String>, reason: impl Into<String>) -> Self {
        self.responses
            .insert(text.into(), MockResponse::Failure(reason.into()));
        self
    }

    /// Sleeps before every response.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `embed` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.responses.get(text) {
            Some(MockResponse::Vector(values)) => Ok(Embedding::new(values.clone())),
            Some(MockResponse::Failure(reason)) => Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            }),
            None => Ok(Embedding::zeros(self.dim)),
        }
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}
