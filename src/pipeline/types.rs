use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMBED_TIMEOUT_SECS, DEFAULT_EXTRACT_TIMEOUT_SECS};
use crate::normalize::NormalizationPolicy;
use crate::scoring::{Verdict, VerdictThresholds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Which side of a comparison a document occupies.
pub enum Slot {
    A,
    B,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::A => write!(f, "document A"),
            Slot::B => write!(f, "document B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Collaborator-backed pipeline stage.
pub enum Stage {
    Extraction,
    Embedding,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Extraction => write!(f, "text extraction"),
            Stage::Embedding => write!(f, "embedding"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Outcome of one completed comparison.
pub struct ComparisonResult {
    /// Normalized text of document A.
    pub text_a: String,
    /// Normalized text of document B.
    pub text_b: String,
    /// Cosine similarity in `[-1.0, 1.0]`.
    pub score: f32,
    pub verdict: Verdict,
}

impl ComparisonResult {
    /// Returns `true` if the verdict warrants a manual review.
    pub fn is_flagged(&self) -> bool {
        self.verdict.is_flagged()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Knobs for [`ComparisonPipeline`](super::ComparisonPipeline).
pub struct PipelineConfig {
    pub normalization: NormalizationPolicy,
    pub thresholds: VerdictThresholds,
    /// Budget per extraction call; `None` waits indefinitely.
    pub extract_timeout: Option<Duration>,
    /// Budget per embedding call; `None` waits indefinitely.
    pub embed_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationPolicy::default(),
            thresholds: VerdictThresholds::default(),
            extract_timeout: Some(Duration::from_secs(DEFAULT_EXTRACT_TIMEOUT_SECS)),
            embed_timeout: Some(Duration::from_secs(DEFAULT_EMBED_TIMEOUT_SECS)),
        }
    }
}

impl PipelineConfig {
    /// No timeouts, default normalization and thresholds.
    pub fn unbounded() -> Self {
        Self {
            extract_timeout: None,
            embed_timeout: None,
            ..Default::default()
        }
    }

    pub fn with_normalization(mut self, normalization: NormalizationPolicy) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_thresholds(mut self, thresholds: VerdictThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_extract_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.extract_timeout = timeout;
        self
    }

    pub fn with_embed_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.embed_timeout = timeout;
        self
    }
}
