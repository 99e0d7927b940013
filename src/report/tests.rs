use super::*;
use crate::scoring::Verdict;

fn result(score: f32, verdict: Verdict) -> ComparisonResult {
    ComparisonResult {
        text_a: "the quick brown fox".to_string(),
        text_b: "the quick brown dog".to_string(),
        score,
        verdict,
    }
}

#[test]
fn test_text_rendering() {
    let report = ComparisonReport::with_labels("a.png", "b.pdf", result(0.8734, Verdict::Moderate));

    let rendered = report.to_string();
    let expected = "\
Document A: a.png
  the quick brown fox

Document B: b.pdf
  the quick brown dog

Similarity Score: 0.87 (0 = different, 1 = identical)
Verdict: MODERATE (moderate similarity, possibly shared structure)";

    assert_eq!(rendered, expected);
}

#[test]
fn test_empty_text_placeholder() {
    let mut r = result(0.0, Verdict::Low);
    r.text_b.clear();
    let report = ComparisonReport::with_labels("a.png", "blank.png", r);

    assert!(report.to_string().contains("Document B: blank.png\n  (no text extracted)\n"));
    assert!(report.to_string().contains("Similarity Score: 0.00"));
}

#[test]
fn test_negative_score_keeps_sign() {
    let report = ComparisonReport::with_labels("a", "b", result(-0.25, Verdict::Low));
    assert!(report.to_string().contains("Similarity Score: -0.25"));
}

#[test]
fn test_json_shape() {
    let report = ComparisonReport::with_labels("a.png", "b.png", result(0.95, Verdict::High));

    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().expect("serialize")).expect("parse");

    assert_eq!(json["document_a"], "a.png");
    assert_eq!(json["document_b"], "b.png");
    assert_eq!(json["text_a"], "the quick brown fox");
    assert_eq!(json["verdict"], "HIGH");
    assert_eq!(json["flagged"], true);
    assert_eq!(json["description"], "very high similarity, possible copy");
    assert_eq!(json["stub_embeddings"], false);
    assert!((json["score"].as_f64().expect("score") - 0.95).abs() < 1e-6);

    let pretty = report.to_json_pretty().expect("serialize");
    assert!(pretty.contains('\n'));
}

#[test]
fn test_report_from_documents() {
    let a = Document::from_path("scans/first.png").expect("doc");
    let b = Document::from_path("scans/second.txt").expect("doc");
    let report = ComparisonReport::new(&a, &b, result(0.1, Verdict::Low));

    assert_eq!(report.document_a, "scans/first.png");
    assert_eq!(report.document_b, "scans/second.txt");
    assert!(!report.flagged);
}

#[test]
fn test_stub_embeddings_are_marked() {
    let report = ComparisonReport::with_labels("a.txt", "b.txt", result(0.8734, Verdict::Moderate))
        .with_stub_embeddings(true);

    assert!(report.to_string().contains(
        "Similarity Score: 0.87 (0 = different, 1 = identical) (stub embeddings)\nVerdict: MODERATE"
    ));

    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().expect("serialize")).expect("parse");
    assert_eq!(json["stub_embeddings"], true);

    let real = ComparisonReport::with_labels("a.txt", "b.txt", result(0.8734, Verdict::Moderate));
    assert!(!real.to_string().contains("stub"));
}
