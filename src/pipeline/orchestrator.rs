use std::future::Future;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::embedding::{Embedding, EmbeddingProvider};
use crate::extraction::{Document, TextExtractor};
use crate::normalize::Normalizer;
use crate::scoring;

use super::error::PipelineError;
use super::types::{ComparisonResult, PipelineConfig, Slot, Stage};

/// Extraction → normalization → embedding → scoring → verdict, for one pair of documents.
///
/// Collaborators are injected at construction and only borrowed per call, so one pipeline
/// can serve many concurrent comparisons (wrap it in an `Arc`).
pub struct ComparisonPipeline<E, M> {
    extractor: E,
    embedder: M,
    normalizer: Normalizer,
    config: PipelineConfig,
}

impl<E, M> std::fmt::Debug for ComparisonPipeline<E, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E, M> ComparisonPipeline<E, M>
where
    E: TextExtractor,
    M: EmbeddingProvider,
{
    pub fn new(extractor: E, embedder: M) -> Self {
        Self::with_config(extractor, embedder, PipelineConfig::default())
    }

    pub fn with_config(extractor: E, embedder: M, config: PipelineConfig) -> Self {
        Self {
            extractor,
            embedder,
            normalizer: Normalizer::new(config.normalization),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn embedder(&self) -> &M {
        &self.embedder
    }

    /// Compares two documents end to end.
    ///
    /// Both extractions run concurrently, then both embeddings. Any collaborator failure
    /// aborts the whole comparison; no partial result is returned.
    #[instrument(skip_all, fields(doc_a = %doc_a.label(), doc_b = %doc_b.label()))]
    pub async fn compare_documents(
        &self,
        doc_a: &Document,
        doc_b: &Document,
    ) -> Result<ComparisonResult, PipelineError> {
        debug!("Extracting text from both documents");

        let (raw_a, raw_b) = tokio::try_join!(
            self.extract(Slot::A, doc_a),
            self.extract(Slot::B, doc_b)
        )?;

        self.compare_texts(&raw_a, &raw_b).await
    }

    /// Compares two already-extracted texts (normalization onwards).
    pub async fn compare_texts(
        &self,
        raw_a: &str,
        raw_b: &str,
    ) -> Result<ComparisonResult, PipelineError> {
        let text_a = self.normalizer.normalize(raw_a);
        let text_b = self.normalizer.normalize(raw_b);

        for (slot, text) in [(Slot::A, &text_a), (Slot::B, &text_b)] {
            if text.is_empty() {
                warn!(%slot, "Normalized text is empty, embedding it anyway");
            }
        }

        let (embedding_a, embedding_b) = tokio::try_join!(
            self.embed(Slot::A, &text_a),
            self.embed(Slot::B, &text_b)
        )?;

        let score = scoring::score(&embedding_a, &embedding_b)?;
        let verdict = self.config.thresholds.classify(score);

        info!(
            score,
            %verdict,
            text_a_len = text_a.len(),
            text_b_len = text_b.len(),
            "Comparison complete"
        );

        Ok(ComparisonResult {
            text_a,
            text_b,
            score,
            verdict,
        })
    }

    async fn extract(&self, slot: Slot, document: &Document) -> Result<String, PipelineError> {
        let call = async {
            self.extractor
                .extract_text(document)
                .await
                .map_err(|source| PipelineError::Extraction { slot, source })
        };

        let text = bounded(self.config.extract_timeout, slot, Stage::Extraction, call).await?;
        debug!(%slot, text_len = text.len(), "Extraction finished");
        Ok(text)
    }

    async fn embed(&self, slot: Slot, text: &str) -> Result<Embedding, PipelineError> {
        let call = async {
            self.embedder
                .embed(text)
                .await
                .map_err(|source| PipelineError::Embedding { slot, source })
        };

        let embedding = bounded(self.config.embed_timeout, slot, Stage::Embedding, call).await?;
        debug!(%slot, dim = embedding.dim(), "Embedding finished");
        Ok(embedding)
    }
}

async fn bounded<T, F>(
    limit: Option<Duration>,
    slot: Slot,
    stage: Stage,
    call: F,
) -> Result<T, PipelineError>
where
    F: Future<Output = Result<T, PipelineError>>,
{
    let Some(limit) = limit else {
        return call.await;
    };

    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!(%slot, %stage, ?limit, "Collaborator exceeded its time budget");
            Err(PipelineError::Timeout { slot, stage, limit })
        }
    }
}
