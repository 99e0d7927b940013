//! Text extraction seam: documents in, recognized text out.
//!
//! - [`TextExtractor`] is the collaborator interface the pipeline depends on.
//! - [`TesseractExtractor`] drives the `tesseract` / `pdftoppm` CLIs.
//!
//! Recognition quality is the backend's concern; this module only fixes the contract:
//! per-page text joined with single spaces, trimmed, with failures typed by
//! [`ExtractionError`].

mod document;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod provider;
/// Tesseract / Poppler backend.
pub mod tesseract;


pub use document::{Document, DocumentSource, MediaType, join_pages};
pub use error::ExtractionError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTextExtractor;
pub use provider::TextExtractor;
pub use tesseract::{TesseractConfig, TesseractExtractor};
