//! Error types for every LearnPath subsystem.
//!
//! Each subsystem has its own error enum; `PathwayError` aggregates them
//! for callers that cross subsystem boundaries.

mod catalog_error;
mod embedding_error;
mod persona_error;

pub use catalog_error::CatalogError;
pub use embedding_error::EmbeddingError;
pub use persona_error::PersonaError;

/// Top-level error type for the LearnPath pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PathwayError {
    #[error("persona error: {0}")]
    PersonaError(#[from] PersonaError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Result alias used across the workspace.
pub type PathwayResult<T> = Result<T, PathwayError>;
