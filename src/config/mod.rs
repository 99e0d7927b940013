//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `DOCSIM_*` environment variables; the CLI
//! applies its own flags on top of whatever [`Config::from_env`] returns.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_EMBED_TIMEOUT_SECS, DEFAULT_EXTRACT_TIMEOUT_SECS, DEFAULT_HIGH_THRESHOLD,
    DEFAULT_MODERATE_THRESHOLD, DEFAULT_OCR_DPI, DEFAULT_OCR_LANG,
};
use crate::embedding::MiniLmConfig;
use crate::extraction::TesseractConfig;
use crate::normalize::NormalizationPolicy;
use crate::pipeline::PipelineConfig;
use crate::scoring::VerdictThresholds;

/// Tool configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DOCSIM_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    /// `None` runs the embedder in stub mode.
    pub model_path: Option<PathBuf>,

    /// `tesseract` executable. Default: `tesseract` (from `PATH`).
    pub tesseract_bin: PathBuf,

    /// `pdftoppm` executable. Default: `pdftoppm` (from `PATH`).
    pub pdftoppm_bin: PathBuf,

    /// Tesseract language codes. Default: `eng`.
    pub ocr_lang: String,

    /// PDF rasterization resolution. Default: `300`.
    pub ocr_dpi: u32,

    /// Per-document extraction budget. `None` waits indefinitely. Default: 120s.
    pub extract_timeout: Option<Duration>,

    /// Per-text embedding budget. `None` waits indefinitely. Default: 30s.
    pub embed_timeout: Option<Duration>,

    /// Lowercase text before embedding. Default: `false`.
    pub fold_case: bool,

    /// Drop punctuation before embedding. Default: `false`.
    pub strip_punctuation: bool,

    /// Scores strictly above this are HIGH. Default: `0.9`.
    pub high_threshold: f32,

    /// Scores strictly above this (and not HIGH) are MODERATE. Default: `0.7`.
    pub moderate_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: None,
            tesseract_bin: PathBuf::from("tesseract"),
            pdftoppm_bin: PathBuf::from("pdftoppm"),
            ocr_lang: DEFAULT_OCR_LANG.to_string(),
            ocr_dpi: DEFAULT_OCR_DPI,
            extract_timeout: Some(Duration::from_secs(DEFAULT_EXTRACT_TIMEOUT_SECS)),
            embed_timeout: Some(Duration::from_secs(DEFAULT_EMBED_TIMEOUT_SECS)),
            fold_case: false,
            strip_punctuation: false,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            moderate_threshold: DEFAULT_MODERATE_THRESHOLD,
        }
    }
}

impl Config {
    const ENV_MODEL_PATH: &'static str = "DOCSIM_MODEL_PATH";
    const ENV_TESSERACT_BIN: &'static str = "DOCSIM_TESSERACT_BIN";
    const ENV_PDFTOPPM_BIN: &'static str = "DOCSIM_PDFTOPPM_BIN";
    const ENV_OCR_LANG: &'static str = "DOCSIM_OCR_LANG";
    const ENV_OCR_DPI: &'static str = "DOCSIM_OCR_DPI";
    const ENV_EXTRACT_TIMEOUT: &'static str = "DOCSIM_EXTRACT_TIMEOUT_SECS";
    const ENV_EMBED_TIMEOUT: &'static str = "DOCSIM_EMBED_TIMEOUT_SECS";
    const ENV_FOLD_CASE: &'static str = "DOCSIM_FOLD_CASE";
    const ENV_STRIP_PUNCTUATION: &'static str = "DOCSIM_STRIP_PUNCTUATION";
    const ENV_HIGH_THRESHOLD: &'static str = "DOCSIM_HIGH_THRESHOLD";
    const ENV_MODERATE_THRESHOLD: &'static str = "DOCSIM_MODERATE_THRESHOLD";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Unlike path and string settings, malformed numbers and booleans are rejected
    /// rather than silently replaced by the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let tesseract_bin =
            Self::parse_path_from_env(Self::ENV_TESSERACT_BIN, defaults.tesseract_bin);
        let pdftoppm_bin = Self::parse_path_from_env(Self::ENV_PDFTOPPM_BIN, defaults.pdftoppm_bin);
        let ocr_lang = Self::parse_string_from_env(Self::ENV_OCR_LANG, defaults.ocr_lang);
        let ocr_dpi = Self::parse_number_from_env(Self::ENV_OCR_DPI, defaults.ocr_dpi)?;
        let extract_timeout =
            Self::parse_timeout_from_env(Self::ENV_EXTRACT_TIMEOUT, defaults.extract_timeout)?;
        let embed_timeout =
            Self::parse_timeout_from_env(Self::ENV_EMBED_TIMEOUT, defaults.embed_timeout)?;
        let fold_case = Self::parse_bool_from_env(Self::ENV_FOLD_CASE, defaults.fold_case)?;
        let strip_punctuation =
            Self::parse_bool_from_env(Self::ENV_STRIP_PUNCTUATION, defaults.strip_punctuation)?;
        let high_threshold =
            Self::parse_number_from_env(Self::ENV_HIGH_THRESHOLD, defaults.high_threshold)?;
        let moderate_threshold =
            Self::parse_number_from_env(Self::ENV_MODERATE_THRESHOLD, defaults.moderate_threshold)?;

        Ok(Self {
            model_path,
            tesseract_bin,
            pdftoppm_bin,
            ocr_lang,
            ocr_dpi,
            extract_timeout,
            embed_timeout,
            fold_case,
            strip_punctuation,
            high_threshold,
            moderate_threshold,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.ocr_dpi == 0 {
            return Err(ConfigError::InvalidDpi);
        }

        if self.ocr_lang.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_OCR_LANG,
            });
        }

        self.thresholds().validate()?;
        Ok(())
    }

    pub fn thresholds(&self) -> VerdictThresholds {
        VerdictThresholds::new(self.high_threshold, self.moderate_threshold)
    }

    pub fn normalization(&self) -> NormalizationPolicy {
        NormalizationPolicy::default()
            .with_fold_case(self.fold_case)
            .with_strip_punctuation(self.strip_punctuation)
    }

    /// Orchestrator settings derived from this configuration.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_normalization(self.normalization())
            .with_thresholds(self.thresholds())
            .with_extract_timeout(self.extract_timeout)
            .with_embed_timeout(self.embed_timeout)
    }

    /// OCR backend settings derived from this configuration.
    pub fn tesseract_config(&self) -> TesseractConfig {
        TesseractConfig {
            tesseract_bin: self.tesseract_bin.clone(),
            pdftoppm_bin: self.pdftoppm_bin.clone(),
            language: self.ocr_lang.clone(),
            dpi: self.ocr_dpi,
            ..Default::default()
        }
    }

    /// Embedder settings; stub mode when no model directory is configured.
    pub fn minilm_config(&self) -> MiniLmConfig {
        match self.model_path {
            Some(ref path) => MiniLmConfig::new(path),
            None => MiniLmConfig::stub(),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        Self::non_blank(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::non_blank(var_name).map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        Self::non_blank(var_name).unwrap_or(default)
    }

    fn parse_number_from_env<T: FromStr>(
        var_name: &'static str,
        default: T,
    ) -> Result<T, ConfigError> {
        match Self::non_blank(var_name) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                }),
            None => Ok(default),
        }
    }

    /// `0` disables the timeout.
    fn parse_timeout_from_env(
        var_name: &'static str,
        default: Option<Duration>,
    ) -> Result<Option<Duration>, ConfigError> {
        let fallback = default.map(|d| d.as_secs()).unwrap_or(0);
        let secs: u64 = Self::parse_number_from_env(var_name, fallback)?;
        Ok((secs > 0).then(|| Duration::from_secs(secs)))
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = Self::non_blank(var_name) else {
            return Ok(default);
        };

        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                name: var_name,
                value,
            }),
        }
    }

    fn non_blank(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
