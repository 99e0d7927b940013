//! Human and machine renderings of a finished comparison.
//!
//! Both front ends (batch and interactive) print through [`ComparisonReport`], so the
//! output format lives in one place.

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;

use crate::extraction::Document;
use crate::pipeline::ComparisonResult;

const EMPTY_TEXT_PLACEHOLDER: &str = "(no text extracted)";
const STUB_MARKER: &str = "(stub embeddings)";

/// A [`ComparisonResult`] together with the labels of the compared documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub document_a: String,
    pub document_b: String,
    #[serde(flatten)]
    pub result: ComparisonResult,
    pub flagged: bool,
    pub description: &'static str,
    /// Scores came from the hash-seeded stub embedder and carry no semantic meaning.
    pub stub_embeddings: bool,
}

impl ComparisonReport {
    pub fn new(doc_a: &Document, doc_b: &Document, result: ComparisonResult) -> Self {
        Self::with_labels(doc_a.label(), doc_b.label(), result)
    }

    pub fn with_labels(
        document_a: impl Into<String>,
        document_b: impl Into<String>,
        result: ComparisonResult,
    ) -> Self {
        Self {
            document_a: document_a.into(),
            document_b: document_b.into(),
            flagged: result.is_flagged(),
            description: result.verdict.description(),
            stub_embeddings: false,
            result,
        }
    }

    pub fn with_stub_embeddings(mut self, stub: bool) -> Self {
        self.stub_embeddings = stub;
        self
    }

    /// Single-line JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON document.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_document(f, "A", &self.document_a, &self.result.text_a)?;
        writeln!(f)?;
        write_document(f, "B", &self.document_b, &self.result.text_b)?;
        writeln!(f)?;
        write!(
            f,
            "Similarity Score: {:.2} (0 = different, 1 = identical)",
            self.result.score
        )?;
        if self.stub_embeddings {
            write!(f, " {STUB_MARKER}")?;
        }
        writeln!(f)?;
        write!(f, "Verdict: {} ({})", self.result.verdict, self.description)
    }
}

fn write_document(f: &mut fmt::Formatter<'_>, slot: &str, label: &str, text: &str) -> fmt::Result {
    writeln!(f, "Document {slot}: {label}")?;
    let text = if text.is_empty() {
        EMPTY_TEXT_PLACEHOLDER
    } else {
        text
    };
    writeln!(f, "  {text}")
}
