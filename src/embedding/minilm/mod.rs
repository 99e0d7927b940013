//! MiniLM sentence encoder (BERT weights + tokenizer, mean pooling).
//!
//! Loads an all-MiniLM-L6-v2 style directory (`config.json`, `model.safetensors`,
//! `tokenizer.json`). Use [`MiniLmConfig::stub`] for tests and dry runs without model files.

/// MiniLM configuration.
pub mod config;

#[cfg(test)]
mod tests;

pub use config::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig};

use std::sync::Arc;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use crate::constants::validate_embedding_dim;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::provider::EmbeddingProvider;
use crate::embedding::types::Embedding;
use crate::embedding::utils::load_tokenizer_with_truncation;

use config::{CONFIG_FILE, WEIGHTS_FILE};

enum EmbedderBackend {
    Model {
        model: BertModel,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
}

/// Sentence embedder backed by a BERT-family encoder (supports stub mode).
///
/// Cloning is cheap: the loaded model is shared behind an `Arc` and only read.
#[derive(Clone)]
pub struct MiniLmEmbedder {
    backend: Arc<EmbedderBackend>,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEmbedder")
            .field(
                "backend",
                &match self.backend.as_ref() {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl MiniLmEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("MiniLM running in STUB mode (scores are not semantically meaningful)");
            return Ok(Self {
                backend: Arc::new(EmbedderBackend::Stub),
                config,
            });
        }

        let device = select_device(config.allow_gpu)?;
        debug!(?device, "Selected compute device for MiniLM");

        let (model, tokenizer) = Self::load_model(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "MiniLM model loaded"
        );

        Ok(Self {
            backend: Arc::new(EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            }),
            config,
        })
    }

    fn load_model(
        config: &MiniLmConfig,
        device: &Device,
    ) -> Result<(BertModel, Tokenizer), EmbeddingError> {
        let config_content = std::fs::read_to_string(config.model_dir.join(CONFIG_FILE))?;
        let bert_config: BertConfig =
            serde_json::from_str(&config_content).map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("Failed to parse {}: {}", CONFIG_FILE, e),
            })?;

        validate_embedding_dim(bert_config.hidden_size, config.embedding_dim).map_err(|e| {
            EmbeddingError::InvalidConfig {
                reason: format!("model hidden_size does not match embedding_dim: {}", e),
            }
        })?;

        let weights_path = config.model_dir.join(WEIGHTS_FILE);
        // SAFETY: the weights file is opened read-only and not modified while mapped.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device) }
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to map weights: {}", e),
            })?;

        // sentence-transformers exports carry no prefix; HF checkpoints nest under `bert.`
        let model = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &bert_config)
        } else {
            BertModel::load(vb, &bert_config)
        }
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("Failed to load BERT encoder: {}", e),
        })?;

        let tokenizer = load_tokenizer_with_truncation(&config.model_dir, config.max_seq_len)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        Ok((model, tokenizer))
    }

    /// Generates an embedding on the calling thread.
    pub fn embed_blocking(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        match self.backend.as_ref() {
            EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &BertModel,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Embedding, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Ok(Embedding::zeros(self.config.embedding_dim));
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Generating embedding (encoder forward pass)"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        // hidden: [1, seq_len, hidden_size]
        let hidden = model.forward(&input_ids, &type_ids, Some(&attention_mask))?;

        // Mean pooling over real tokens only.
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?;
        let pooled = summed.broadcast_div(&counts)?.squeeze(0)?;

        let values = pooled.to_vec1::<f32>()?;
        validate_embedding_dim(values.len(), self.config.embedding_dim)?;

        Ok(Embedding::new(values).normalized())
    }

    fn embed_stub(&self, text: &str) -> Embedding {
        debug!(text_len = text.len(), "Generating stub embedding");

        let hash = blake3::hash(text.as_bytes());
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&hash.as_bytes()[..8]);
        let mut state = u64::from_le_bytes(seed);

        let mut values = Vec::with_capacity(self.config.embedding_dim);
        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            values.push(value);
        }

        Embedding::new(values).normalized()
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend.as_ref(), EmbedderBackend::Stub)
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl EmbeddingProvider for MiniLmEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        if self.is_stub() {
            return Ok(self.embed_stub(text));
        }

        let embedder = self.clone();
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || embedder.embed_blocking(&text))
            .await
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("embedding task failed: {}", e),
            })?
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }
}
