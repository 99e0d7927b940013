use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default MiniLM embedding dimension.
pub const MINILM_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default MiniLM max sequence length.
pub const MINILM_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Files expected inside a model directory.
pub const CONFIG_FILE: &str = "config.json";
pub const WEIGHTS_FILE: &str = "model.safetensors";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

#[derive(Debug, Clone)]
/// Configuration for [`MiniLmEmbedder`](super::MiniLmEmbedder).
pub struct MiniLmConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens per input; longer inputs are truncated.
    pub max_seq_len: usize,
    /// Expected output dimension (must equal the model's hidden size).
    pub embedding_dim: usize,
    /// Try Metal/CUDA when compiled in.
    pub allow_gpu: bool,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: MINILM_MAX_SEQ_LEN,
            embedding_dim: MINILM_EMBEDDING_DIM,
            allow_gpu: true,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_allow_gpu(mut self, allow_gpu: bool) -> Self {
        self.allow_gpu = allow_gpu;
        self
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be non-zero".to_string(),
            });
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be non-zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        for file in [CONFIG_FILE, WEIGHTS_FILE, TOKENIZER_FILE] {
            let path = self.model_dir.join(file);
            if !path.is_file() {
                return Err(EmbeddingError::ModelNotFound { path });
            }
        }

        Ok(())
    }
}
