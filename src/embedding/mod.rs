//! Embedding provider seam + implementations.
//!
//! - [`EmbeddingProvider`] is the collaborator interface the pipeline depends on.
//! - [`minilm`] is the candle-backed sentence encoder (with a deterministic stub mode).

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// MiniLM sentence encoder.
pub mod minilm;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod provider;
mod types;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use provider::EmbeddingProvider;
pub use types::Embedding;

pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
