use std::future::Future;
use std::sync::Arc;

use super::document::Document;
use super::error::ExtractionError;

/// Converts a [`Document`] into raw recognized text.
///
/// Multi-page documents come back as one string: pages joined with a single space and
/// trimmed (see [`join_pages`](super::join_pages)). Implementations hold any loaded models
/// or tool configuration and must be safe to share across concurrent comparisons.
pub trait TextExtractor: Send + Sync {
    fn extract_text(
        &self,
        document: &Document,
    ) -> impl Future<Output = Result<String, ExtractionError>> + Send;
}

impl<T: TextExtractor> TextExtractor for Arc<T> {
    fn extract_text(
        &self,
        document: &Document,
    ) -> impl Future<Output = Result<String, ExtractionError>> + Send {
        (**self).extract_text(document)
    }
}
