//! Abstract interfaces implemented across the workspace.

mod embedding;
mod retrieval;

pub use embedding::IEmbeddingProvider;
pub use retrieval::{CourseQuery, ICourseRetriever};
