//! Classification types.

use serde::{Deserialize, Serialize};

/// One of the two fixed triage outcomes.
///
/// The serialized tokens are preserved verbatim from the system this engine
/// feeds (`"produtivo"` / `"improdutivo"`) so that persisted and queried
/// data stays compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "produtivo")]
    Productive,
    #[serde(rename = "improdutivo")]
    Unproductive,
}

impl Category {
    /// The wire token for this category.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Productive => "produtivo",
            Self::Unproductive => "improdutivo",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Output of a single classification strategy, before result assembly.
#[derive(Debug, Clone)]
pub struct Classification {
    pub category: Category,
    /// Unrounded confidence in the chosen category.
    pub confidence: f64,
    /// Suggested canned reply. Never empty.
    pub response: String,
}

/// Final per-request result. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Confidence in [0, 0.95], rounded to 3 decimals.
    pub confidence_score: f64,
    /// Suggested canned reply. Never empty.
    pub suggested_response: String,
    /// Elapsed wall-clock seconds, rounded to 3 decimals.
    pub processing_time: f64,
}
