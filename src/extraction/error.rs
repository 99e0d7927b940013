use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document format: {detail}")]
    UnsupportedFormat { detail: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` failed: {reason}")]
    CommandFailed { program: String, reason: String },

    #[error("document produced no pages: {document}")]
    EmptyDocument { document: String },

    #[error("text extraction failed: {reason}")]
    Failed { reason: String },
}

impl ExtractionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the input was rejected before any recognition ran.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
