use super::*;
use crate::embedding::Embedding;

fn emb(values: &[f32]) -> Embedding {
    Embedding::new(values.to_vec())
}

/// Deterministic pseudo-random vectors covering mixed signs and magnitudes.
fn sample_vectors(dim: usize, count: usize) -> Vec<Embedding> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|i| {
            let scale = 10f32.powi((i % 5) as i32 - 2);
            let values = (0..dim)
                .map(|_| {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    (((state >> 33) as f32 / (1u64 << 31) as f32) * 2.0 - 1.0) * scale
                })
                .collect();
            Embedding::new(values)
        })
        .collect()
}

#[test]
fn test_identical_unit_vectors_score_one() {
    let s = score(&emb(&[1.0, 0.0]), &emb(&[1.0, 0.0])).expect("score");
    assert_eq!(s, 1.0);
    assert_eq!(VerdictThresholds::default().classify(s), Verdict::High);
}

#[test]
fn test_orthogonal_vectors_score_zero() {
    let s = score(&emb(&[1.0, 0.0]), &emb(&[0.0, 1.0])).expect("score");
    assert_eq!(s, 0.0);
    assert_eq!(VerdictThresholds::default().classify(s), Verdict::Low);
}

#[test]
fn test_diagonal_vector_is_moderate() {
    let s = score(&emb(&[1.0, 1.0]), &emb(&[1.0, 0.0])).expect("score");
    assert!((s - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6, "got {s}");
    assert_eq!(VerdictThresholds::default().classify(s), Verdict::Moderate);
}

#[test]
fn test_opposite_vectors_score_minus_one() {
    let s = score(&emb(&[2.0, -3.0]), &emb(&[-2.0, 3.0])).expect("score");
    assert!((s + 1.0).abs() < 1e-6, "got {s}");
}

#[test]
fn test_magnitude_is_ignored() {
    let s = score(&emb(&[3.0, 4.0]), &emb(&[300.0, 400.0])).expect("score");
    assert!((s - 1.0).abs() < 1e-6, "got {s}");
}

#[test]
fn test_self_similarity_is_one() {
    for v in sample_vectors(64, 20) {
        let s = score(&v, &v).expect("score");
        assert!((s - 1.0).abs() < 1e-6, "got {s}");
    }
}

#[test]
fn test_symmetry() {
    let vectors = sample_vectors(32, 12);
    for a in &vectors {
        for b in &vectors {
            assert_eq!(score(a, b).expect("score"), score(b, a).expect("score"));
        }
    }
}

#[test]
fn test_bounded_range() {
    let vectors = sample_vectors(16, 12);
    for a in &vectors {
        for b in &vectors {
            let s = score(a, b).expect("score");
            assert!((-1.0..=1.0).contains(&s), "out of range: {s}");
        }
    }
}

#[test]
fn test_large_components_stay_bounded() {
    let big = emb(&[f32::MAX, f32::MAX, -f32::MAX]);
    let s = score(&big, &big).expect("score");
    assert!((s - 1.0).abs() < 1e-6, "got {s}");
}

#[test]
fn test_zero_vector_scores_zero() {
    let zero = Embedding::zeros(3);
    let other = emb(&[0.5, -1.0, 2.0]);
    assert_eq!(score(&zero, &other), Ok(0.0));
    assert_eq!(score(&other, &zero), Ok(0.0));
    assert_eq!(score(&zero, &zero), Ok(0.0));
}

#[test]
fn test_dimension_mismatch_rejected() {
    let err = score(&emb(&[1.0, 0.0]), &emb(&[1.0, 0.0, 0.0])).unwrap_err();
    assert_eq!(err, ScoringError::DimensionMismatch { left: 2, right: 3 });
}

#[test]
fn test_empty_embedding_rejected() {
    assert_eq!(
        score(&Embedding::default(), &emb(&[1.0])),
        Err(ScoringError::EmptyEmbedding)
    );
    assert_eq!(
        score(&Embedding::default(), &Embedding::default()),
        Err(ScoringError::EmptyEmbedding)
    );
}

#[test]
fn test_non_finite_rejected() {
    assert_eq!(
        score(&emb(&[1.0, f32::NAN]), &emb(&[1.0, 1.0])),
        Err(ScoringError::NonFinite { index: 1 })
    );
    assert_eq!(
        score(&emb(&[1.0, 1.0]), &emb(&[f32::INFINITY, 1.0])),
        Err(ScoringError::NonFinite { index: 0 })
    );
}

#[test]
fn test_cosine_similarity_slices() {
    assert_eq!(cosine_similarity(&[0.0, 2.0], &[0.0, 5.0]), Ok(1.0));
}

#[test]
fn test_verdict_boundaries_fall_to_lower_band() {
    let thresholds = VerdictThresholds::default();
    assert_eq!(thresholds.classify(0.9), Verdict::Moderate);
    assert_eq!(thresholds.classify(0.900_001), Verdict::High);
    assert_eq!(thresholds.classify(0.7), Verdict::Low);
    assert_eq!(thresholds.classify(0.700_001), Verdict::Moderate);
    assert_eq!(thresholds.classify(-1.0), Verdict::Low);
    assert_eq!(thresholds.classify(1.0), Verdict::High);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = VerdictThresholds::new(0.5, 0.2);
    assert!(thresholds.validate().is_ok());
    assert_eq!(thresholds.classify(0.6), Verdict::High);
    assert_eq!(thresholds.classify(0.3), Verdict::Moderate);
    assert_eq!(thresholds.classify(0.2), Verdict::Low);
}

#[test]
fn test_threshold_validation() {
    assert!(VerdictThresholds::default().validate().is_ok());
    assert_eq!(
        VerdictThresholds::new(0.7, 0.7).validate(),
        Err(ThresholdError::Unordered {
            high: 0.7,
            moderate: 0.7
        })
    );
    assert!(matches!(
        VerdictThresholds::new(0.5, 0.8).validate(),
        Err(ThresholdError::Unordered { .. })
    ));
    assert!(matches!(
        VerdictThresholds::new(1.5, 0.7).validate(),
        Err(ThresholdError::OutOfRange { .. })
    ));
    assert!(matches!(
        VerdictThresholds::new(0.9, -1.5).validate(),
        Err(ThresholdError::OutOfRange { .. })
    ));
    assert!(matches!(
        VerdictThresholds::new(f32::NAN, 0.7).validate(),
        Err(ThresholdError::OutOfRange { .. })
    ));
}

#[test]
fn test_verdict_labels() {
    assert_eq!(Verdict::High.to_string(), "HIGH");
    assert_eq!(Verdict::Moderate.as_str(), "MODERATE");
    assert_eq!(Verdict::Low.description(), "low similarity, likely original");
    assert!(Verdict::High.is_flagged());
    assert!(Verdict::Moderate.is_flagged());
    assert!(!Verdict::Low.is_flagged());
}

#[test]
fn test_verdict_serde() {
    assert_eq!(
        serde_json::to_string(&Verdict::Moderate).expect("serialize"),
        "\"MODERATE\""
    );
    let parsed: Verdict = serde_json::from_str("\"HIGH\"").expect("deserialize");
    assert_eq!(parsed, Verdict::High);
}
