//! ONNX-based embedding backend (all-MiniLM-L6-v2 style sentence encoder).
//!
//! Loads a SentenceTransformers ONNX export and its tokenizer to generate
//! fixed-dimension float32 embeddings. Requires the `onnx` feature.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;

    use mailtriage_core::{Error, Result};
    use ndarray::Array1;
    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tokenizers::Tokenizer;
    use tracing::{info, warn};

    use crate::embedder::EmbedderBackend;

    /// Maximum sequence length for the encoder.
    const MAX_SEQ_LEN: usize = 512;

    /// Default embedding dimension (all-MiniLM-L6-v2).
    const DEFAULT_DIM: usize = 384;

    /// ONNX sentence-embedding backend.
    pub struct OnnxEmbedder {
        session: Mutex<Session>,
        tokenizer: Tokenizer,
        dimension: usize,
    }

    impl OnnxEmbedder {
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

            // With load-dynamic, ORT_DYLIB_PATH must point to libonnxruntime
            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| Error::ModelLoad(format!("session builder: {}", e)))?
                .with_intra_threads(2)
                .map_err(|e| Error::ModelLoad(format!("thread config: {}", e)))?
                .commit_from_file(&model_path)
                .map_err(|e| Error::ModelLoad(format!("model load: {}", e)))?;

            let tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| Error::ModelLoad(format!("tokenizer load: {}", e)))?;

            info!(
                "ONNX embedder loaded: dim={}, model={}",
                DEFAULT_DIM,
                model_path.display()
            );

            Ok(Self {
                session: Mutex::new(session),
                tokenizer,
                dimension: DEFAULT_DIM,
            })
        }

        fn infer(&self, text: &str) -> Option<Array1<f32>> {
            let encoding = self
                .tokenizer
                .encode(text, true)
                .map_err(|e| warn!("Tokenization failed: {}", e))
                .ok()?;

            let input_ids = encoding.get_ids();
            let attention_mask = encoding.get_attention_mask();

            let seq_len = input_ids.len().min(MAX_SEQ_LEN);
            let input_ids = &input_ids[..seq_len];
            let attention_mask = &attention_mask[..seq_len];

            let ids_data: Vec<i64> = input_ids.iter().map(|&id| id as i64).collect();
            let mask_data: Vec<i64> = attention_mask.iter().map(|&m| m as i64).collect();
            let type_ids_data: Vec<i64> = vec![0i64; seq_len];

            let ids_tensor = Tensor::from_array(([1usize, seq_len], ids_data))
                .map_err(|e| warn!("Failed to create ids tensor: {}", e))
                .ok()?;
            let mask_tensor = Tensor::from_array(([1usize, seq_len], mask_data))
                .map_err(|e| warn!("Failed to create mask tensor: {}", e))
                .ok()?;
            let type_ids_tensor = Tensor::from_array(([1usize, seq_len], type_ids_data))
                .map_err(|e| warn!("Failed to create type_ids tensor: {}", e))
                .ok()?;

            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![ids_tensor, mask_tensor, type_ids_tensor])
                .map_err(|e| warn!("ONNX inference failed: {}", e))
                .ok()?;

            // SentenceTransformers exports output either
            //   [1, seq_len, dim] token embeddings (needs mean pooling), or
            //   [1, dim] already-pooled sentence embedding.
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| warn!("Failed to extract output tensor: {}", e))
                .ok()?;

            let shape_dims: Vec<i64> = shape.iter().copied().collect();

            match shape_dims.as_slice() {
                [_, _, dim] => {
                    let dim = *dim as usize;
                    Self::mean_pool(data, attention_mask, dim)
                }
                [_, dim] => {
                    let dim = *dim as usize;
                    Some(Array1::from_vec(data[..dim].to_vec()))
                }
                other => {
                    warn!("Unexpected output shape: {:?}", other);
                    None
                }
            }
        }

        /// Mean pooling over token embeddings, weighted by the attention mask.
        fn mean_pool(data: &[f32], attention_mask: &[u32], dim: usize) -> Option<Array1<f32>> {
            let mask_sum: f32 = attention_mask.iter().map(|&m| m as f32).sum();
            if mask_sum < 1e-9 {
                return None;
            }

            // data is laid out as [batch=1][seq_len][dim]
            let mut pooled = Array1::zeros(dim);
            for (i, &m) in attention_mask.iter().enumerate() {
                if m > 0 {
                    let offset = i * dim;
                    for d in 0..dim {
                        pooled[d] += data[offset + d];
                    }
                }
            }
            Some(pooled / mask_sum)
        }
    }

    impl EmbedderBackend for OnnxEmbedder {
        fn embed(&self, text: &str) -> Option<Array1<f32>> {
            self.infer(text)
        }

        fn dimension(&self) -> usize {
            self.dimension
        }

        fn is_available(&self) -> bool {
            true
        }
    }
}

#[cfg(feature = "onnx")]
pub use inner::OnnxEmbedder;
