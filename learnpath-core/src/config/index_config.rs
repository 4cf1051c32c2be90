use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Course index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// ONNX sentence-encoder model file. `None` selects the mock provider.
    pub onnx_model_path: Option<PathBuf>,
    /// Expected embedding dimensionality.
    pub embedding_dims: usize,
    /// Seed for the mock provider's deterministic vectors.
    pub mock_seed: u64,
    /// Query-embedding cache capacity, in entries.
    pub cache_capacity: u64,
    /// Query-embedding cache TTL, in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: None,
            embedding_dims: defaults::DEFAULT_EMBEDDING_DIMS,
            mock_seed: defaults::DEFAULT_RANDOM_SEED,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
