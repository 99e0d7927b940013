use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::document::Document;
use super::error::ExtractionError;
use super::provider::TextExtractor;

#[derive(Clone)]
enum MockOutcome {
    Text(String),
    Unsupported,
    Failure(String),
}

/// Table-driven [`TextExtractor`] keyed by [`Document::label`].
///
/// Unknown documents fail with [`ExtractionError::Failed`].
#[derive(Default)]
pub struct MockTextExtractor {
    outcomes: HashMap<String, MockOutcome>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl MockTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.outcomes
            .insert(label.into(), MockOutcome::Text(text.into()));
        self
    }

    pub fn with_unsupported(mut self, label: impl Into<String>) -> Self {
        self.outcomes.insert(label.into(), MockOutcome::Unsupported);
        self
    }

    pub fn with_failure(mut self, label: impl Into<String>, reason: impl Into<String>) -> Self {
        self.outcomes
            .insert(label.into(), MockOutcome::Failure(reason.into()));
        self
    }

    /// Sleeps before answering for `label`.
    pub fn with_delay(mut self, label: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(label.into(), delay);
        self
    }

    /// Number of `extract_text` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextExtractor for MockTextExtractor {
    async fn extract_text(&self, document: &Document) -> Result<String, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let label = document.label();

        if let Some(delay) = self.delays.get(&label) {
            tokio::time::sleep(*delay).await;
        }

        match self.outcomes.get(&label) {
            Some(MockOutcome::Text(text)) => Ok(text.clone()),
            Some(MockOutcome::Unsupported) => Err(ExtractionError::UnsupportedFormat {
                detail: label,
            }),
            Some(MockOutcome::Failure(reason)) => Err(ExtractionError::Failed {
                reason: reason.clone(),
            }),
            None => Err(ExtractionError::Failed {
                reason: format!("no mock outcome registered for {label}"),
            }),
        }
    }
}
