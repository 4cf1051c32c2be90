//! Named default values backing every config struct.

/// Directory holding persisted persona model artifacts.
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Cluster count for the behavioral persona model.
pub const DEFAULT_CLUSTERS: usize = 3;

/// Synthetic samples generated for bootstrap training.
pub const DEFAULT_BOOTSTRAP_SAMPLES: usize = 600;

/// Seed for dataset synthesis, centroid seeding, and the mock embedder.
pub const DEFAULT_RANDOM_SEED: u64 = 42;

/// Lloyd iteration cap for k-means training.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Maximum centroid movement treated as converged.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// Input dimensionality above which PCA reduction applies.
pub const DEFAULT_REDUCTION_THRESHOLD: usize = 50;

/// Output dimensionality of the PCA reduction.
pub const DEFAULT_REDUCED_DIMS: usize = 10;

/// Embedding dimensionality of the sentence encoder (all-MiniLM-L6-v2).
pub const DEFAULT_EMBEDDING_DIMS: usize = 384;

/// Query-embedding cache capacity, in entries.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Query-embedding cache TTL, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Courses returned by curated retrieval.
pub const DEFAULT_TOP_COURSES: usize = 3;

/// Matches returned by semantic retrieval.
pub const DEFAULT_TOP_MATCHES: usize = 5;
