//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::scoring::ThresholdError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}' as a number")]
    InvalidNumber { name: &'static str, value: String },

    /// A boolean variable was not one of `1/0`, `true/false`, `yes/no`, `on/off`.
    #[error("failed to parse {name}='{value}' as a boolean")]
    InvalidBool { name: &'static str, value: String },

    /// A setting that must carry text was blank.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },

    /// Verdict thresholds are out of range or out of order.
    #[error("invalid verdict thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),

    #[error("OCR DPI must be greater than zero")]
    InvalidDpi,

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
