//! Text canonicalization applied to extracted text before embedding.
//!
//! The default policy only collapses whitespace: every run of Unicode whitespace becomes a
//! single ASCII space and the ends are trimmed. Case folding and punctuation stripping are
//! opt-in through [`NormalizationPolicy`].
//!
//! Every policy is idempotent: `normalize(normalize(x)) == normalize(x)`.


use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// Optional normalization knobs. Both are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationPolicy {
    /// Lowercase using Unicode case mapping.
    pub fold_case: bool,
    /// Drop characters in the Unicode punctuation categories (`Pc`, `Pd`, `Ps`, `Pe`, `Pi`,
    /// `Pf`, `Po`).
    pub strip_punctuation: bool,
}

impl NormalizationPolicy {
    /// Whitespace collapse only.
    pub const fn whitespace_only() -> Self {
        Self {
            fold_case: false,
            strip_punctuation: false,
        }
    }

    pub const fn with_fold_case(mut self, enabled: bool) -> Self {
        self.fold_case = enabled;
        self
    }

    pub const fn with_strip_punctuation(mut self, enabled: bool) -> Self {
        self.strip_punctuation = enabled;
        self
    }
}

/// Normalizer bound to a fixed policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    policy: NormalizationPolicy,
}

impl Normalizer {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize_with(text, self.policy)
    }
}

/// Normalizes with the default (whitespace-only) policy.
pub fn normalize(text: &str) -> String {
    normalize_with(text, NormalizationPolicy::default())
}

/// Normalizes `text` under `policy`. Total over all inputs; never fails.
pub fn normalize_with(text: &str, policy: NormalizationPolicy) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if policy.strip_punctuation && ch.is_punctuation() {
            continue;
        }

        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }

        if pending_space {
            out.push(' ');
            pending_space = false;
        }

        if policy.fold_case {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
