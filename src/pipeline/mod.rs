//! Comparison orchestration.
//!
//! ```text
//!  doc A ──extract──┐                     ┌──embed── A ──┐
//!                   ├─ normalize (each) ──┤              ├─ cosine ─ verdict
//!  doc B ──extract──┘                     └──embed── B ──┘
//! ```
//!
//! The two extractions are independent and run concurrently, as are the two embeddings;
//! scoring joins on both. Each collaborator call may carry its own timeout.
//!
//! Empty normalized text is still embedded. Providers usually return a degenerate vector
//! for it, and the scorer's zero-norm rule then yields `0.0`.

pub mod error;
pub mod orchestrator;
pub mod types;


pub use error::PipelineError;
pub use orchestrator::ComparisonPipeline;
pub use types::{ComparisonResult, PipelineConfig, Slot, Stage};
