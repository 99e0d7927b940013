use thiserror::Error;

/// Malformed embeddings handed to the scorer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("embedding dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cannot score an empty embedding")]
    EmptyEmbedding,

    #[error("embedding contains a non-finite component at index {index}")]
    NonFinite { index: usize },
}

/// Verdict cut-offs that cannot partition `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    #[error("thresholds must lie in [-1, 1] (high={high}, moderate={moderate})")]
    OutOfRange { high: f32, moderate: f32 },

    #[error("moderate threshold ({moderate}) must be below high threshold ({high})")]
    Unordered { high: f32, moderate: f32 },
}
