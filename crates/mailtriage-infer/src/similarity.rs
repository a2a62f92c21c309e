//! Cosine similarity between embedding vectors.

use ndarray::Array1;

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Returns 0.0 when either vector is (near) zero or dimensions differ.
pub fn cosine_similarity(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot = a.dot(b);
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();

    if norm_a < 1e-9 || norm_b < 1e-9 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Maximum cosine similarity of `query` against a set of reference vectors.
///
/// The maximum is taken over the raw similarities, which may be negative; a
/// query pointing away from every reference still yields its true best
/// match so callers can compare maxima across sets. Returns 0.0 only for an
/// empty set.
pub fn max_similarity(query: &Array1<f32>, references: &[Array1<f32>]) -> f32 {
    if references.is_empty() {
        return 0.0;
    }
    references
        .iter()
        .map(|r| cosine_similarity(query, r))
        .fold(f32::NEG_INFINITY, f32::max)
}
