//! docsim library crate (used by the CLI binary and integration tests).
//!
//! Compares two documents (scanned images, PDFs or plain text) by extracting their text,
//! embedding it, and scoring the pair with cosine similarity.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`ComparisonPipeline`] - Extraction → normalization → embedding → scoring → verdict
//! - [`ComparisonResult`], [`PipelineConfig`], [`PipelineError`]
//! - [`ComparisonReport`] - Text and JSON rendering shared by both front ends
//!
//! ## Collaborators
//! - [`TextExtractor`], [`TesseractExtractor`] - Text extraction (OCR)
//! - [`EmbeddingProvider`], [`MiniLmEmbedder`] - Sentence embeddings
//!
//! ## Pure Functions
//! - [`normalize`], [`normalize_with`] - Text canonicalization
//! - [`cosine_similarity`], [`score`] - Similarity scoring
//! - [`VerdictThresholds::classify`] - Score → [`Verdict`]
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod extraction;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{DimValidationError, validate_embedding_dim};

pub use embedding::{
    Embedding, EmbeddingError, EmbeddingProvider, MINILM_EMBEDDING_DIM, MiniLmConfig,
    MiniLmEmbedder,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;

pub use extraction::{
    Document, DocumentSource, ExtractionError, MediaType, TesseractConfig, TesseractExtractor,
    TextExtractor,
};
#[cfg(any(test, feature = "mock"))]
pub use extraction::MockTextExtractor;

pub use normalize::{NormalizationPolicy, Normalizer, normalize, normalize_with};
pub use pipeline::{
    ComparisonPipeline, ComparisonResult, PipelineConfig, PipelineError, Slot, Stage,
};
pub use report::ComparisonReport;
pub use scoring::{ScoringError, ThresholdError, Verdict, VerdictThresholds, cosine_similarity, score};
