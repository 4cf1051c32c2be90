use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Persona model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Directory holding the scaler/kmeans/pca artifacts.
    pub model_dir: PathBuf,
    /// Number of persona clusters.
    pub clusters: usize,
    /// Synthetic samples generated when no artifacts exist.
    pub bootstrap_samples: usize,
    /// Seed for dataset synthesis and centroid seeding.
    pub random_seed: u64,
    /// Lloyd iteration cap.
    pub max_iterations: usize,
    /// Maximum centroid movement treated as converged.
    pub convergence_threshold: f64,
    /// Input dimensionality above which PCA reduction applies.
    pub reduction_threshold: usize,
    /// PCA output dimensionality.
    pub reduced_dims: usize,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(defaults::DEFAULT_MODEL_DIR),
            clusters: defaults::DEFAULT_CLUSTERS,
            bootstrap_samples: defaults::DEFAULT_BOOTSTRAP_SAMPLES,
            random_seed: defaults::DEFAULT_RANDOM_SEED,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            convergence_threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
            reduction_threshold: defaults::DEFAULT_REDUCTION_THRESHOLD,
            reduced_dims: defaults::DEFAULT_REDUCED_DIMS,
        }
    }
}
