use std::time::Duration;

use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::extraction::ExtractionError;
use crate::scoring::ScoringError;

use super::types::{Slot, Stage};

/// Why a comparison aborted. Every variant except `Validation` names the failing document.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("text extraction failed for {slot}: {source}")]
    Extraction {
        slot: Slot,
        #[source]
        source: ExtractionError,
    },

    #[error("embedding failed for {slot}: {source}")]
    Embedding {
        slot: Slot,
        #[source]
        source: EmbeddingError,
    },

    #[error("{stage} for {slot} exceeded its time budget of {limit:?}")]
    Timeout {
        slot: Slot,
        stage: Stage,
        limit: Duration,
    },

    #[error("invalid embeddings: {0}")]
    Validation(#[from] ScoringError),
}

impl PipelineError {
    /// The document this failure belongs to, if any.
    pub fn slot(&self) -> Option<Slot> {
        match self {
            PipelineError::Extraction { slot, .. }
            | PipelineError::Embedding { slot, .. }
            | PipelineError::Timeout { slot, .. } => Some(*slot),
            PipelineError::Validation(_) => None,
        }
    }

    /// The collaborator stage that failed, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Extraction { .. } => Some(Stage::Extraction),
            PipelineError::Embedding { .. } => Some(Stage::Embedding),
            PipelineError::Timeout { stage, .. } => Some(*stage),
            PipelineError::Validation(_) => None,
        }
    }
}
