use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HIGH_THRESHOLD, DEFAULT_MODERATE_THRESHOLD};

use super::error::ThresholdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Qualitative band for a similarity score.
pub enum Verdict {
    /// Very high similarity, possible copy.
    High,
    /// Moderate similarity, possibly shared structure.
    Moderate,
    /// Low similarity, likely original.
    Low,
}

impl Verdict {
    /// Returns the band label (`HIGH` / `MODERATE` / `LOW`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::High => "HIGH",
            Verdict::Moderate => "MODERATE",
            Verdict::Low => "LOW",
        }
    }

    /// Returns the human-readable explanation shown next to the score.
    pub fn description(&self) -> &'static str {
        match self {
            Verdict::High => "very high similarity, possible copy",
            Verdict::Moderate => "moderate similarity, possibly shared structure",
            Verdict::Low => "low similarity, likely original",
        }
    }

    /// Returns `true` for bands that warrant a manual review.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, Verdict::Low)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Score cut-offs for [`Verdict`]. Both comparisons are strict: a score equal to a
/// threshold falls into the lower band.
pub struct VerdictThresholds {
    /// `score > high` is [`Verdict::High`].
    pub high: f32,
    /// `moderate < score <= high` is [`Verdict::Moderate`].
    pub moderate: f32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            moderate: DEFAULT_MODERATE_THRESHOLD,
        }
    }
}

impl VerdictThresholds {
    pub fn new(high: f32, moderate: f32) -> Self {
        Self { high, moderate }
    }

    /// Checks `-1 <= moderate < high <= 1`.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let (high, moderate) = (self.high, self.moderate);
        let in_range = |v: f32| (-1.0..=1.0).contains(&v);
        if !in_range(high) || !in_range(moderate) {
            return Err(ThresholdError::OutOfRange { high, moderate });
        }
        if moderate >= high {
            return Err(ThresholdError::Unordered { high, moderate });
        }
        Ok(())
    }

    /// Maps a score to its band.
    pub fn classify(&self, score: f32) -> Verdict {
        if score > self.high {
            Verdict::High
        } else if score > self.moderate {
            Verdict::Moderate
        } else {
            Verdict::Low
        }
    }
}
