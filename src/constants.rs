//! Cross-cutting, shared constants.
//!
//! # Dimension Invariants
//!
//! The embedding dimension is owned by the embedding provider, not by the pipeline. The
//! default below matches the MiniLM sentence encoder family. Use [`validate_embedding_dim`]
//! at module boundaries (model load, provider output) to catch mismatches early.

/// Output dimension of all-MiniLM-L6-v2 style encoders.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token budget for a single embedding call; longer inputs are truncated.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Scores strictly above this are flagged as a likely copy.
pub const DEFAULT_HIGH_THRESHOLD: f32 = 0.9;

/// Scores strictly above this (and not above the high threshold) are moderate.
pub const DEFAULT_MODERATE_THRESHOLD: f32 = 0.7;

pub const DEFAULT_EXTRACT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_EMBED_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_OCR_LANG: &str = "eng";
pub const DEFAULT_OCR_DPI: u32 = 300;

/// Tesseract page segmentation mode 3: fully automatic page segmentation.
pub const DEFAULT_OCR_PSM: u32 = 3;

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use docsim::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// let model_hidden_size = 384;
/// validate_embedding_dim(model_hidden_size, DEFAULT_EMBEDDING_DIM).unwrap();
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
