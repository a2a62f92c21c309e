//! MailTriage Infer — embedding and sentiment inference backends.
//!
//! Provides the `EmbedderBackend` and `SentimentBackend` traits consumed by
//! the classifier. When the `onnx` feature is enabled and model files are
//! present, `OnnxEmbedder` and `OnnxSentiment` run real models. Without it,
//! the noop backends are used and classification falls back to keywords.

pub mod embedder;
pub mod onnx_embedder;
pub mod onnx_sentiment;
pub mod sentiment;
pub mod similarity;

pub use embedder::{EmbedderBackend, NoopEmbedder};
pub use sentiment::{NeutralSentiment, SentimentBackend};
pub use similarity::cosine_similarity;

#[cfg(feature = "onnx")]
pub use onnx_embedder::OnnxEmbedder;
#[cfg(feature = "onnx")]
pub use onnx_sentiment::OnnxSentiment;

use std::path::Path;
use std::sync::Arc;

/// Create the best available embedder for the given model directory.
///
/// Tries ONNX first (if the feature is enabled and model files are present),
/// falls back to `NoopEmbedder`.
pub fn create_embedder(model_dir: &Path) -> Arc<dyn EmbedderBackend> {
    #[cfg(feature = "onnx")]
    {
        match OnnxEmbedder::load(model_dir) {
            Ok(embedder) => {
                tracing::info!("Using ONNX embedder (dim={})", embedder.dimension());
                return Arc::new(embedder);
            }
            Err(e) => {
                tracing::warn!("ONNX embedder unavailable: {}. Keyword fallback only.", e);
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        let _ = model_dir;
        tracing::info!("ONNX feature disabled. Keyword fallback only.");
    }

    Arc::new(NoopEmbedder::new(384))
}

/// Create the best available sentiment scorer for the given model directory.
pub fn create_sentiment(model_dir: &Path) -> Arc<dyn SentimentBackend> {
    #[cfg(feature = "onnx")]
    {
        match OnnxSentiment::load(model_dir) {
            Ok(sentiment) => {
                tracing::info!("Using ONNX sentiment scorer");
                return Arc::new(sentiment);
            }
            Err(e) => {
                tracing::warn!("ONNX sentiment unavailable: {}. Using neutral score.", e);
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        let _ = model_dir;
    }

    Arc::new(NeutralSentiment)
}
