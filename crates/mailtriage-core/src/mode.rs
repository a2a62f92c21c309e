//! Engine mode — the process-wide primary/fallback capability flag.

use serde::{Deserialize, Serialize};

/// Whether the semantic (model-backed) classifier is available.
///
/// Decided exactly once at startup, when model loading either succeeds or
/// fails. `PrimaryUnavailable` is terminal for the process lifetime: a model
/// that failed to load is never retried. Per-call inference failures do not
/// change the mode; they only reroute that single call to the keyword
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// Semantic classifier loaded; calls go through it first.
    PrimaryReady,
    /// Model load failed or disabled; every call uses the keyword fallback.
    PrimaryUnavailable,
}

impl std::fmt::Display for EngineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrimaryReady => write!(f, "primary_ready"),
            Self::PrimaryUnavailable => write!(f, "primary_unavailable"),
        }
    }
}
