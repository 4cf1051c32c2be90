use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Pathway assembly configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathwayConfig {
    /// Course retrieval strategy.
    pub strategy: RetrievalStrategy,
    /// Courses returned by curated retrieval.
    pub top_courses: usize,
    /// Matches returned by semantic retrieval.
    pub top_matches: usize,
    /// Curated catalog file. `None` uses the builtin catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for PathwayConfig {
    fn default() -> Self {
        Self {
            strategy: RetrievalStrategy::Curated,
            top_courses: defaults::DEFAULT_TOP_COURSES,
            top_matches: defaults::DEFAULT_TOP_MATCHES,
            catalog_path: None,
        }
    }
}

/// How recommended courses are retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStrategy {
    /// Hand-maintained catalog keyed by role and persona label.
    Curated,
    /// Embedding similarity search over the course corpus.
    Semantic,
}
