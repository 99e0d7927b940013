//! Cosine scoring and verdict bands.
//!
//! [`score`] is a pure function of two embeddings: deterministic, symmetric and bounded to
//! `[-1.0, 1.0]`. A zero-norm input scores `0.0` instead of dividing by zero; that is the
//! only local recovery. Malformed input (empty, mismatched dimensions, non-finite values)
//! is rejected with [`ScoringError`].
//!
//! [`VerdictThresholds::classify`] turns a score into a [`Verdict`]:
//!
//! | score            | verdict  |
//! |------------------|----------|
//! | `> 0.9`          | HIGH     |
//! | `(0.7, 0.9]`     | MODERATE |
//! | `<= 0.7`         | LOW      |

pub mod error;
pub mod scorer;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{ScoringError, ThresholdError};
pub use scorer::{cosine_similarity, score};
pub use types::{Verdict, VerdictThresholds};
