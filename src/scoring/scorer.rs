use crate::embedding::Embedding;

use super::error::ScoringError;

/// Cosine similarity between two embeddings, bounded to `[-1.0, 1.0]`.
///
/// Fails if either embedding is empty, the dimensions differ, or a component is NaN or
/// infinite. A zero-norm vector on either side scores `0.0`.
pub fn score(a: &Embedding, b: &Embedding) -> Result<f32, ScoringError> {
    cosine_similarity(a.as_slice(), b.as_slice())
}

/// Slice form of [`score`].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoringError> {
    if a.is_empty() || b.is_empty() {
        return Err(ScoringError::EmptyEmbedding);
    }

    if a.len() != b.len() {
        return Err(ScoringError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    // f64 accumulators keep squares of large f32 components finite.
    let mut dot = 0.0f64;
    let mut norm_a_sq = 0.0f64;
    let mut norm_b_sq = 0.0f64;

    for (index, (&av, &bv)) in a.iter().zip(b.iter()).enumerate() {
        if !av.is_finite() || !bv.is_finite() {
            return Err(ScoringError::NonFinite { index });
        }
        let (av, bv) = (f64::from(av), f64::from(bv));
        dot += av * bv;
        norm_a_sq += av * av;
        norm_b_sq += bv * bv;
    }

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0) as f32)
}
