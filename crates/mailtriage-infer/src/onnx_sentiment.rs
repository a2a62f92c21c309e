//! ONNX-based sentiment scorer (sequence-classification head).
//!
//! Runs a text-classification model (e.g. a RoBERTa sentiment export) and
//! returns the winning-class probability after softmax. Requires the `onnx`
//! feature.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;

    use mailtriage_core::{Error, Result};
    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tokenizers::Tokenizer;
    use tracing::{info, warn};

    use crate::sentiment::SentimentBackend;

    /// Maximum sequence length for the classifier.
    const MAX_SEQ_LEN: usize = 512;

    /// ONNX sequence-classification sentiment scorer.
    pub struct OnnxSentiment {
        session: Mutex<Session>,
        tokenizer: Tokenizer,
    }

    impl OnnxSentiment {
        /// Load an ONNX model and tokenizer from the given directory.
        ///
        /// Expects `model_dir/model.onnx` and `model_dir/tokenizer.json`.
        pub fn load(model_dir: &Path) -> Result<Self> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");

            if !model_path.exists() {
                return Err(Error::ModelLoad(format!(
                    "model not found: {}",
                    model_path.display()
                )));
            }
            if !tokenizer_path.exists() {
                return Err(Error::ModelLoad(format!(
                    "tokenizer not found: {}",
                    tokenizer_path.display()
                )));
            }

            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| Error::ModelLoad(format!("session builder: {}", e)))?
                .with_intra_threads(1)
                .map_err(|e| Error::ModelLoad(format!("thread config: {}", e)))?
                .commit_from_file(&model_path)
                .map_err(|e| Error::ModelLoad(format!("model load: {}", e)))?;

            let tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| Error::ModelLoad(format!("tokenizer load: {}", e)))?;

            info!("ONNX sentiment scorer loaded: {}", model_path.display());

            Ok(Self {
                session: Mutex::new(session),
                tokenizer,
            })
        }

        fn infer(&self, text: &str) -> Option<f32> {
            let encoding = self
                .tokenizer
                .encode(text, true)
                .map_err(|e| warn!("Tokenization failed: {}", e))
                .ok()?;

            let input_ids = encoding.get_ids();
            let attention_mask = encoding.get_attention_mask();

            let seq_len = input_ids.len().min(MAX_SEQ_LEN);
            let ids_data: Vec<i64> = input_ids[..seq_len].iter().map(|&id| id as i64).collect();
            let mask_data: Vec<i64> = attention_mask[..seq_len]
                .iter()
                .map(|&m| m as i64)
                .collect();

            let ids_tensor = Tensor::from_array(([1usize, seq_len], ids_data))
                .map_err(|e| warn!("Failed to create ids tensor: {}", e))
                .ok()?;
            let mask_tensor = Tensor::from_array(([1usize, seq_len], mask_data))
                .map_err(|e| warn!("Failed to create mask tensor: {}", e))
                .ok()?;

            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![ids_tensor, mask_tensor])
                .map_err(|e| warn!("ONNX inference failed: {}", e))
                .ok()?;

            // Classification head outputs logits [1, num_classes].
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| warn!("Failed to extract logits: {}", e))
                .ok()?;

            let shape_dims: Vec<i64> = shape.iter().copied().collect();
            let num_classes = match shape_dims.as_slice() {
                [_, n] => *n as usize,
                other => {
                    warn!("Unexpected logits shape: {:?}", other);
                    return None;
                }
            };

            Some(Self::max_softmax(&data[..num_classes]))
        }

        /// Probability of the winning class under softmax.
        fn max_softmax(logits: &[f32]) -> f32 {
            let max_logit = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let exps: Vec<f32> = logits.iter().map(|&l| (l - max_logit).exp()).collect();
            let sum: f32 = exps.iter().sum();
            exps.iter().copied().fold(0.0, f32::max) / sum
        }
    }

    impl SentimentBackend for OnnxSentiment {
        fn score(&self, text: &str) -> Option<f32> {
            self.infer(text)
        }

        fn is_available(&self) -> bool {
            true
        }
    }
}

#[cfg(feature = "onnx")]
pub use inner::OnnxSentiment;
