/// Persona model errors.
#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    #[error("model artifact missing: {path}")]
    ArtifactMissing { path: String },

    #[error("model artifact corrupt at {path}: {reason}")]
    ArtifactCorrupt { path: String, reason: String },

    #[error("artifact schema version {found} does not match expected {expected}")]
    SchemaMismatch { found: u32, expected: u32 },

    #[error("model not trained: {reason}")]
    NotTrained { reason: String },

    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("training failed: {reason}")]
    TrainingFailed { reason: String },
}
