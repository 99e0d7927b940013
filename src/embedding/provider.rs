use std::future::Future;
use std::sync::Arc;

use super::error::EmbeddingError;
use super::types::Embedding;

/// Turns a string into a fixed-length [`Embedding`].
///
/// Implementations are constructed once and shared read-only across concurrent
/// comparisons, so they must be reentrant.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a single (already normalized) text. Empty strings must be accepted.
    fn embed(&self, text: &str) -> impl Future<Output = Result<Embedding, EmbeddingError>> + Send;

    /// Dimension of every embedding this provider returns.
    fn embedding_dim(&self) -> usize;
}

impl<T: EmbeddingProvider> EmbeddingProvider for Arc<T> {
    fn embed(&self, text: &str) -> impl Future<Output = Result<Embedding, EmbeddingError>> + Send {
        (**self).embed(text)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }
}
