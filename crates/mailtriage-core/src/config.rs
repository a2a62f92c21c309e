//! Configuration for the triage engine binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum length of normalized text, in characters.
pub const MAX_INPUT_CHARS: usize = 512;

/// Model paths for the triage engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Directory holding the embedding model (`model.onnx` + `tokenizer.json`).
    pub embedding_model_dir: PathBuf,
    /// Directory holding the sentiment model (`model.onnx` + `tokenizer.json`).
    pub sentiment_model_dir: PathBuf,
}

impl TriageConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let embedding_model_dir = std::env::var("MAILTRIAGE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models/embedding"));
        let sentiment_model_dir = std::env::var("MAILTRIAGE_SENTIMENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models/sentiment"));

        Self {
            embedding_model_dir,
            sentiment_model_dir,
        }
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
