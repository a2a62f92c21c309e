//! Keyword-frequency fallback classifier.
//!
//! Dependency-free strategy used when the semantic classifier is unavailable
//! or fails for a call. Scores each category by how many of its keywords
//! appear in the text (substring containment, one point per keyword).
//! Deterministic and infallible for any string input.

use crate::response;
use crate::types::{Category, Classification};

/// Keywords signalling actionable correspondence.
pub const PRODUCTIVE_KEYWORDS: &[&str] = &[
    "solicitação", "solicitacao", "urgent", "urgente", "problema", "erro", "bug",
    "suporte", "help", "ajuda", "status", "andamento", "update", "atualização",
    "prazo", "deadline", "reunião", "meeting", "documento", "arquivo", "anexo",
    "aprovação", "aprovar", "revisar", "análise", "pendente", "pendencia",
];

/// Keywords signalling greetings, thanks and other non-actionable mail.
pub const UNPRODUCTIVE_KEYWORDS: &[&str] = &[
    "parabéns", "parabens", "feliz", "aniversário", "aniversario", "natal",
    "ano novo", "obrigado", "obrigada", "thanks", "thank you", "agradeço",
    "bom dia", "boa tarde", "boa noite", "cumprimentos", "saudações",
];

/// Upper bound on fallback confidence.
const MAX_CONFIDENCE: f64 = 0.9;

/// The fallback classification strategy.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message by keyword score.
    ///
    /// Ties go to [`Category::Unproductive`]: a message matching neither
    /// list carries no actionable signal.
    pub fn classify(&self, content: &str, subject: &str) -> Classification {
        let combined = format!("{} {}", subject.to_lowercase(), content.to_lowercase());

        let productive_score = Self::score(&combined, PRODUCTIVE_KEYWORDS);
        let unproductive_score = Self::score(&combined, UNPRODUCTIVE_KEYWORDS);

        if productive_score > unproductive_score {
            Classification {
                category: Category::Productive,
                confidence: (0.6 + 0.1 * productive_score as f64).min(MAX_CONFIDENCE),
                response: response::keyword_reply(Category::Productive, content).to_string(),
            }
        } else {
            Classification {
                category: Category::Unproductive,
                confidence: (0.6 + 0.1 * unproductive_score as f64).min(MAX_CONFIDENCE),
                response: response::keyword_reply(Category::Unproductive, content).to_string(),
            }
        }
    }

    /// Number of keywords contained in the text.
    fn score(text: &str, keywords: &[&str]) -> usize {
        keywords.iter().filter(|kw| text.contains(*kw)).count()
    }
}
