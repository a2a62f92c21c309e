//! Sentiment backend trait and the neutral implementation.

/// Trait for sentiment scorers.
///
/// The score is the winning-class probability of a text classifier, in
/// [0, 1]. It is consumed as a generic confidence booster by the semantic
/// classifier, not as a polarity signal.
pub trait SentimentBackend: Send + Sync {
    /// Score a text. Returns None if the scorer is unavailable or fails;
    /// callers substitute a neutral 0.5.
    fn score(&self, text: &str) -> Option<f32>;

    /// Check if the scorer is available (model loaded).
    fn is_available(&self) -> bool;
}

/// Placeholder scorer that never produces a score.
pub struct NeutralSentiment;

impl SentimentBackend for NeutralSentiment {
    fn score(&self, _text: &str) -> Option<f32> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }
}
