//! Deterministic mock embedding provider.
//!
//! Stands in for the sentence encoder on machines without the model
//! file. Vectors are random, so similarity scores rank arbitrarily;
//! `is_semantic` returns false so callers can say so.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use learnpath_core::errors::PathwayResult;
use learnpath_core::traits::IEmbeddingProvider;

/// Mock provider producing seeded uniform random vectors.
///
/// The same instance always maps the same text to the same vector:
/// the generator is re-seeded per text from the instance seed and a
/// hash of the text.
pub struct MockEmbedder {
    dimensions: usize,
    seed: u64,
}

impl MockEmbedder {
    pub fn new(dimensions: usize, seed: u64) -> Self {
        Self { dimensions, seed }
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let digest = blake3::hash(text.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        let text_key = u64::from_le_bytes(head);

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ text_key);
        (0..self.dimensions).map(|_| rng.gen::<f32>()).collect()
    }
}

impl IEmbeddingProvider for MockEmbedder {
    fn embed(&self, text: &str) -> PathwayResult<Vec<f32>> {
        Ok(self.vector_for(text))
    }

    fn embed_batch(&self, texts: &[String]) -> PathwayResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector_for(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "mock-embedder"
    }

    fn is_semantic(&self) -> bool {
        false
    }
}
