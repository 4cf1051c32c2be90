//! Sentence-encoder provider backed by ONNX Runtime.
//!
//! Loads MiniLM-class encoders (384-dim) via the `ort` crate (v2).
//! Texts go through a hashed whitespace tokenizer; the encoder output
//! is mean-pooled and L2-normalized.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use learnpath_core::errors::{EmbeddingError, PathwayResult};
use learnpath_core::traits::IEmbeddingProvider;

/// Real embedding provider wrapping an `ort` session.
#[derive(Debug)]
pub struct OnnxEmbedder {
    /// `Session::run` needs `&mut self`; the Mutex restores the `&self`
    /// contract of the provider trait.
    session: Mutex<Session>,
    dimensions: usize,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxEmbedder {}

impl OnnxEmbedder {
    /// Load an encoder from an ONNX model file.
    pub fn load(model_path: &Path, dimensions: usize) -> PathwayResult<Self> {
        let load_failed = |reason: String| EmbeddingError::ModelLoadFailed {
            path: model_path.display().to_string(),
            reason,
        };

        if !model_path.exists() {
            return Err(load_failed("model file not found".to_string()).into());
        }

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-encoder")
            .to_string();

        debug!(model = %model_name, dims = dimensions, "sentence encoder loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_name,
        })
    }

    fn infer(&self, text: &str) -> PathwayResult<Vec<f32>> {
        let token_ids = hashed_tokenize(text);
        let seq_len = token_ids.len();
        let attention_mask = vec![1i64; seq_len];

        let ids_tensor =
            Tensor::from_array((vec![1i64, seq_len as i64], token_ids)).map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;
        let mask_tensor =
            Tensor::from_array((vec![1i64, seq_len as i64], attention_mask)).map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs =
            session
                .run(ort::inputs![ids_tensor, mask_tensor])
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: e.to_string(),
                })?;

        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| EmbeddingError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;
        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let mut embedding =
            mean_pool(shape, data).ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: format!("unexpected output shape: {shape:?}"),
            })?;
        l2_normalize(&mut embedding);
        embedding.resize(self.dimensions, 0.0);
        Ok(embedding)
    }
}

impl IEmbeddingProvider for OnnxEmbedder {
    fn embed(&self, text: &str) -> PathwayResult<Vec<f32>> {
        self.infer(text)
    }

    fn embed_batch(&self, texts: &[String]) -> PathwayResult<Vec<Vec<f32>>> {
        // Sequential inference; padded batch inference is future work
        // once corpus sizes warrant it.
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_semantic(&self) -> bool {
        true
    }
}

/// Split on non-alphanumeric boundaries and hash each word into a
/// BERT-sized vocab range, bracketed by [CLS]/[SEP] ids.
fn hashed_tokenize(text: &str) -> Vec<i64> {
    if text.is_empty() {
        return vec![101, 102];
    }
    let mut ids = vec![101i64];
    for word in text.split(|c: char| !c.is_alphanumeric() && c != '_') {
        if word.is_empty() {
            continue;
        }
        let mut h: u32 = 0x811c9dc5;
        for b in word.to_lowercase().as_bytes() {
            h ^= u32::from(*b);
            h = h.wrapping_mul(0x01000193);
        }
        ids.push(i64::from(1 + (h % 29999)));
    }
    ids.push(102);
    ids
}

/// Collapse the encoder output to a single vector. Handles both
/// `[batch, seq, dims]` token outputs and `[batch, dims]` pooled
/// outputs; anything else is unexpected.
fn mean_pool(shape: &[i64], data: &[f32]) -> Option<Vec<f32>> {
    match shape.len() {
        3 => {
            let seq = shape[1] as usize;
            let dims = shape[2] as usize;
            let mut pooled = vec![0.0f32; dims];
            for s in 0..seq {
                for (d, value) in pooled.iter_mut().enumerate() {
                    *value += data[s * dims + d];
                }
            }
            for value in &mut pooled {
                *value /= seq as f32;
            }
            Some(pooled)
        }
        2 => {
            let dims = shape[1] as usize;
            Some(data[..dims].to_vec())
        }
        _ => None,
    }
}

fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_fails_to_load() {
        let err = OnnxEmbedder::load(Path::new("/nonexistent/encoder.onnx"), 384).unwrap_err();
        assert!(err.to_string().contains("model file not found"));
    }

    #[test]
    fn tokenizer_brackets_words_with_special_ids() {
        let ids = hashed_tokenize("python data analysis");
        assert_eq!(ids.first(), Some(&101));
        assert_eq!(ids.last(), Some(&102));
        assert_eq!(ids.len(), 5);
        assert!(ids[1..4].iter().all(|&id| (1..30000).contains(&id)));
    }

    #[test]
    fn tokenizer_handles_empty_text() {
        assert_eq!(hashed_tokenize(""), vec![101, 102]);
    }

    #[test]
    fn tokenizer_is_case_insensitive() {
        assert_eq!(hashed_tokenize("Python SQL"), hashed_tokenize("python sql"));
    }

    #[test]
    fn mean_pool_collapses_token_outputs() {
        // [1, 2, 3]: two token vectors of width 3
        let data = [1.0, 2.0, 3.0, 3.0, 4.0, 5.0];
        let pooled = mean_pool(&[1, 2, 3], &data).unwrap();
        assert_eq!(pooled, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn mean_pool_passes_through_pooled_outputs() {
        let data = [0.5, 0.25];
        assert_eq!(mean_pool(&[1, 2], &data).unwrap(), vec![0.5, 0.25]);
    }

    #[test]
    fn mean_pool_rejects_unknown_shapes() {
        assert!(mean_pool(&[4], &[0.0; 4]).is_none());
    }

    #[test]
    fn normalize_produces_unit_norm() {
        let mut v = vec![3.0f32, 4.0];
        l2_normalize(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn normalize_leaves_zero_vectors_alone() {
        let mut v = vec![0.0f32, 0.0];
        l2_normalize(&mut v);
        assert_eq!(v, vec![0.0, 0.0]);
    }
}
