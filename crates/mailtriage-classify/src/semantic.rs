//! Semantic (primary) classifier.
//!
//! Embeds the message and compares it against two fixed reference phrase
//! sets, one per category. The reference embeddings are computed once at
//! load and are read-only afterwards, so the classifier can be shared
//! across concurrent calls without locking.

use std::sync::Arc;

use mailtriage_core::{Error, Result};
use ndarray::Array1;
use tracing::debug;

use mailtriage_infer::similarity::max_similarity;
use mailtriage_infer::{EmbedderBackend, SentimentBackend};

use crate::response;
use crate::types::{Category, Classification};

/// Reference phrases for actionable correspondence.
pub const PRODUCTIVE_EXAMPLES: &[&str] = &[
    "preciso de ajuda com um problema urgente",
    "solicito atualização sobre minha requisição",
    "há um erro no sistema que precisa ser corrigido",
    "preciso de suporte técnico",
    "quando será concluído meu pedido",
    "documento para análise e aprovação",
    "reunião para discussão do projeto",
];

/// Reference phrases for greetings, thanks and other non-actionable mail.
pub const UNPRODUCTIVE_EXAMPLES: &[&str] = &[
    "parabéns pelo excelente trabalho",
    "obrigado pela ajuda de ontem",
    "feliz aniversário para você",
    "bom dia para toda equipe",
    "feliz natal e próspero ano novo",
];

/// Upper bound on semantic confidence.
const MAX_CONFIDENCE: f64 = 0.95;

/// Neutral sentiment score used when the scorer cannot produce one.
const NEUTRAL_SENTIMENT: f32 = 0.5;

/// Characters of combined text fed to the sentiment scorer.
const SENTIMENT_WINDOW_CHARS: usize = 512;

/// The primary classification strategy.
pub struct SemanticClassifier {
    embedder: Arc<dyn EmbedderBackend>,
    sentiment: Arc<dyn SentimentBackend>,
    productive_refs: Vec<Array1<f32>>,
    unproductive_refs: Vec<Array1<f32>>,
}

impl SemanticClassifier {
    /// Build the classifier by pre-embedding both reference sets.
    ///
    /// Fails if the embedding backend is unavailable or any reference phrase
    /// fails to embed. The caller is expected to downgrade to the keyword
    /// fallback for the process lifetime on failure.
    pub fn load(
        embedder: Arc<dyn EmbedderBackend>,
        sentiment: Arc<dyn SentimentBackend>,
    ) -> Result<Self> {
        if !embedder.is_available() {
            return Err(Error::ModelLoad("embedding backend unavailable".into()));
        }

        let productive_refs = Self::embed_references(&*embedder, PRODUCTIVE_EXAMPLES)?;
        let unproductive_refs = Self::embed_references(&*embedder, UNPRODUCTIVE_EXAMPLES)?;

        debug!(
            "Semantic classifier loaded: {} productive / {} unproductive references, dim={}",
            productive_refs.len(),
            unproductive_refs.len(),
            embedder.dimension()
        );

        Ok(Self {
            embedder,
            sentiment,
            productive_refs,
            unproductive_refs,
        })
    }

    fn embed_references(
        embedder: &dyn EmbedderBackend,
        phrases: &[&str],
    ) -> Result<Vec<Array1<f32>>> {
        phrases
            .iter()
            .map(|phrase| {
                embedder.embed(phrase).ok_or_else(|| {
                    Error::Inference(format!("failed to embed reference phrase: {}", phrase))
                })
            })
            .collect()
    }

    /// Classify a message.
    ///
    /// Returns `None` when embedding fails for this call; the engine then
    /// routes the call to the keyword fallback. A missing sentiment score is
    /// not a failure — a neutral 0.5 is substituted.
    pub fn classify(&self, content: &str, subject: &str) -> Option<Classification> {
        let combined = format!("{} {}", subject, content);
        let combined = combined.trim();

        let query = self.embedder.embed(combined)?;

        let sim_productive = max_similarity(&query, &self.productive_refs);
        let sim_unproductive = max_similarity(&query, &self.unproductive_refs);

        let window: String = combined.chars().take(SENTIMENT_WINDOW_CHARS).collect();
        let sentiment = self
            .sentiment
            .score(&window)
            .unwrap_or(NEUTRAL_SENTIMENT);

        let (category, winning_similarity) = if sim_productive > sim_unproductive {
            (Category::Productive, sim_productive)
        } else {
            (Category::Unproductive, sim_unproductive)
        };

        // The sentiment score boosts confidence regardless of which category
        // wins; it is a certainty signal, not a polarity signal.
        let margin = (sim_productive - sim_unproductive).abs() as f64;
        let confidence = (0.5 + margin + 0.2 * sentiment as f64).min(MAX_CONFIDENCE);

        debug!(
            category = %category,
            sim_productive,
            sim_unproductive,
            sentiment,
            "semantic classification"
        );

        Some(Classification {
            category,
            confidence,
            response: response::semantic_reply(category, content, winning_similarity).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CueEmbedder, FixedSentiment};

    fn classifier() -> SemanticClassifier {
        SemanticClassifier::load(
            Arc::new(CueEmbedder::new()),
            Arc::new(FixedSentiment(0.75)),
        )
        .unwrap()
    }

    #[test]
    fn test_load_fails_without_embedder() {
        let result = SemanticClassifier::load(
            Arc::new(mailtriage_infer::NoopEmbedder::new(384)),
            Arc::new(FixedSentiment(0.5)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_productive_message() {
        let c = classifier();
        let result = c.classify("há um erro no sistema", "").unwrap();
        assert_eq!(result.category, Category::Productive);
        assert!(result.confidence <= 0.95);
        assert!(result.confidence >= 0.5);
        // High similarity to the error reference and a problem cue in the
        // content select the technical-problem template.
        assert!(result.response.contains("problema técnico"));
    }

    #[test]
    fn test_unproductive_message() {
        let c = classifier();
        let result = c.classify("obrigado pela atenção", "").unwrap();
        assert_eq!(result.category, Category::Unproductive);
        assert!(result.response.contains("prazer ajudar"));
    }

    #[test]
    fn test_confidence_clamped() {
        let c = SemanticClassifier::load(
            Arc::new(CueEmbedder::new()),
            Arc::new(FixedSentiment(1.0)),
        )
        .unwrap();
        let result = c.classify("há um erro no sistema", "").unwrap();
        assert!(result.confidence <= 0.95);
    }

    #[test]
    fn test_subject_feeds_classification() {
        let c = classifier();
        let result = c.classify("por favor verifiquem", "erro no suporte").unwrap();
        assert_eq!(result.category, Category::Productive);
    }

    #[test]
    fn test_negative_similarities_still_compared() {
        // A query embedding negatively against both sets must still pick
        // the category with the higher raw maximum (here the productive
        // set, cos -0.669 vs -0.743), not fall to a zeroed tie.
        let c = SemanticClassifier::load(
            Arc::new(crate::testing::NegativeQueryEmbedder),
            Arc::new(FixedSentiment(0.5)),
        )
        .unwrap();
        let result = c.classify("mensagem sem relação alguma", "").unwrap();
        assert_eq!(result.category, Category::Productive);
        assert!(result.confidence > 0.5);
    }

    #[test]
    fn test_embed_failure_returns_none() {
        let c = SemanticClassifier::load(
            Arc::new(crate::testing::ReferenceOnlyEmbedder::new()),
            Arc::new(FixedSentiment(0.5)),
        )
        .unwrap();
        assert!(c.classify("texto qualquer", "").is_none());
    }
}
