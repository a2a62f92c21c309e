//! Top-level triage engine.
//!
//! Wires preprocessor, semantic classifier and keyword fallback together.
//! The engine is read-only after construction and takes `&self`, so it can
//! be shared across concurrent requests via `Arc` without coordination.

use std::sync::Arc;
use std::time::Instant;

use mailtriage_core::EngineMode;
use tracing::{info, warn};

use mailtriage_infer::{EmbedderBackend, SentimentBackend};

use crate::keyword::KeywordClassifier;
use crate::preprocess::normalize;
use crate::semantic::SemanticClassifier;
use crate::types::{Classification, ClassificationResult};

/// The triage engine. Always returns a result, never an error.
pub struct TriageEngine {
    mode: EngineMode,
    semantic: Option<SemanticClassifier>,
    keyword: KeywordClassifier,
}

impl TriageEngine {
    /// Build the engine, loading the semantic classifier if possible.
    ///
    /// A load failure is not fatal: the engine downgrades to keyword-only
    /// mode for the process lifetime and the failed load is never retried.
    pub fn new(
        embedder: Arc<dyn EmbedderBackend>,
        sentiment: Arc<dyn SentimentBackend>,
    ) -> Self {
        match SemanticClassifier::load(embedder, sentiment) {
            Ok(semantic) => {
                info!("Triage engine ready: semantic classifier loaded");
                Self {
                    mode: EngineMode::PrimaryReady,
                    semantic: Some(semantic),
                    keyword: KeywordClassifier::new(),
                }
            }
            Err(e) => {
                warn!("Semantic classifier unavailable: {}. Keyword fallback only.", e);
                Self::fallback_only()
            }
        }
    }

    /// Build a keyword-only engine.
    pub fn fallback_only() -> Self {
        Self {
            mode: EngineMode::PrimaryUnavailable,
            semantic: None,
            keyword: KeywordClassifier::new(),
        }
    }

    /// The mode decided at construction.
    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    /// Classify a message and assemble the final result.
    ///
    /// Content and subject are normalized first. In `PrimaryReady` mode the
    /// semantic classifier runs; if it fails for this call, the keyword
    /// fallback handles the call (the mode does not change). In
    /// `PrimaryUnavailable` mode the keyword fallback handles every call.
    pub fn process_email(&self, content: &str, subject: &str) -> ClassificationResult {
        let start = Instant::now();

        let clean_content = normalize(content);
        let clean_subject = if subject.is_empty() {
            String::new()
        } else {
            normalize(subject)
        };

        let outcome = self.classify(&clean_content, &clean_subject);

        ClassificationResult {
            category: outcome.category,
            confidence_score: round3(outcome.confidence),
            suggested_response: outcome.response,
            processing_time: round3(start.elapsed().as_secs_f64()),
        }
    }

    fn classify(&self, content: &str, subject: &str) -> Classification {
        if let Some(semantic) = &self.semantic {
            if let Some(outcome) = semantic.classify(content, subject) {
                return outcome;
            }
            warn!("Semantic classification failed; using keyword fallback for this call");
        }
        self.keyword.classify(content, subject)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CueEmbedder, FixedSentiment, ReferenceOnlyEmbedder};
    use crate::types::Category;
    use mailtriage_infer::{NeutralSentiment, NoopEmbedder};

    fn semantic_engine() -> TriageEngine {
        TriageEngine::new(Arc::new(CueEmbedder::new()), Arc::new(FixedSentiment(0.75)))
    }

    #[test]
    fn test_noop_embedder_downgrades_at_startup() {
        let engine = TriageEngine::new(Arc::new(NoopEmbedder::new(384)), Arc::new(NeutralSentiment));
        assert_eq!(engine.mode(), EngineMode::PrimaryUnavailable);

        // Still serves results.
        let result = engine.process_email("há um erro no sistema", "");
        assert_eq!(result.category, Category::Productive);
    }

    #[test]
    fn test_per_call_fallthrough_keeps_mode() {
        let engine = TriageEngine::new(
            Arc::new(ReferenceOnlyEmbedder::new()),
            Arc::new(FixedSentiment(0.5)),
        );
        assert_eq!(engine.mode(), EngineMode::PrimaryReady);

        // Embedding fails per call; keyword fallback answers, mode unchanged.
        let result = engine.process_email("Preciso de ajuda urgente, há um erro no sistema", "");
        assert_eq!(result.category, Category::Productive);
        assert!(result.confidence_score <= 0.9);
        assert_eq!(engine.mode(), EngineMode::PrimaryReady);
    }

    #[test]
    fn test_fallback_scenario_urgent_error() {
        let engine = TriageEngine::fallback_only();
        let result = engine.process_email("Preciso de ajuda urgente, há um erro no sistema", "");
        assert_eq!(result.category, Category::Productive);
        assert_eq!(result.confidence_score, 0.9);
        // technical-problem template
        assert!(result.suggested_response.contains("relato sobre o problema"));
    }

    #[test]
    fn test_fallback_scenario_congratulations() {
        let engine = TriageEngine::fallback_only();
        let result =
            engine.process_email("Parabéns pelo excelente trabalho, obrigado por tudo", "");
        assert_eq!(result.category, Category::Unproductive);
        assert_eq!(
            result.suggested_response,
            crate::response::KEYWORD_UNPRODUCTIVE_REPLY
        );
    }

    #[test]
    fn test_fallback_scenario_empty_input() {
        let engine = TriageEngine::fallback_only();
        let result = engine.process_email("", "");
        assert_eq!(result.category, Category::Unproductive);
        assert_eq!(result.confidence_score, 0.6);
        assert_eq!(
            result.suggested_response,
            crate::response::KEYWORD_UNPRODUCTIVE_REPLY
        );
    }

    #[test]
    fn test_semantic_path_end_to_end() {
        let engine = semantic_engine();
        assert_eq!(engine.mode(), EngineMode::PrimaryReady);

        let result = engine.process_email("há um erro no sistema", "Suporte");
        assert_eq!(result.category, Category::Productive);
        assert!(result.confidence_score <= 0.95);
        assert!(!result.suggested_response.is_empty());
        assert!(result.processing_time >= 0.0);
    }

    #[test]
    fn test_result_invariants_across_inputs() {
        let engine = TriageEngine::fallback_only();
        let inputs = [
            "",
            "texto sem nenhuma palavra-chave",
            "obrigado! parabéns! feliz natal!",
            "status do documento pendente, prazo urgente",
            "contato: user@example.com fone 11987654321",
        ];
        for input in inputs {
            let result = engine.process_email(input, "");
            assert!(
                matches!(result.category, Category::Productive | Category::Unproductive),
                "unexpected category for {:?}",
                input
            );
            assert!(result.confidence_score >= 0.0 && result.confidence_score <= 0.9);
            assert!(!result.suggested_response.is_empty());
            assert!(result.processing_time >= 0.0);
        }
    }

    #[test]
    fn test_fallback_determinism() {
        let engine = TriageEngine::fallback_only();
        let a = engine.process_email("Solicito atualização do status", "andamento");
        let b = engine.process_email("Solicito atualização do status", "andamento");
        assert_eq!(a.category, b.category);
        assert_eq!(a.confidence_score.to_bits(), b.confidence_score.to_bits());
        assert_eq!(a.suggested_response, b.suggested_response);
    }

    #[test]
    fn test_confidence_rounded_to_three_decimals() {
        let engine = TriageEngine::fallback_only();
        let result = engine.process_email("obrigado pela ajuda de sempre", "");
        let scaled = result.confidence_score * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_very_long_input_is_truncated_not_rejected() {
        let engine = TriageEngine::fallback_only();
        let long = "urgente problema erro ".repeat(500);
        let result = engine.process_email(&long, "");
        assert_eq!(result.category, Category::Productive);
        assert_eq!(result.confidence_score, 0.9);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = Arc::new(TriageEngine::fallback_only());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.process_email("erro urgente", ""))
            })
            .collect();
        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.category, Category::Productive);
        }
    }
}
