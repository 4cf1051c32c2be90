//! The in-memory course similarity index.

use std::time::Duration;

use tracing::{debug, info};

use learnpath_core::config::IndexConfig;
use learnpath_core::errors::PathwayResult;
use learnpath_core::models::{CourseMatch, CourseRecord, DegradationEvent};
use learnpath_core::traits::IEmbeddingProvider;

use crate::cache::QueryCache;
use crate::providers;
use crate::similarity::cosine_similarity;

/// Embedding-backed similarity search over the course corpus.
///
/// `ingest` embeds every course once and keeps the matrix in memory;
/// `query` embeds the query text (cached) and ranks the whole corpus
/// by cosine similarity. Ingest takes `&mut self`, so a corpus swap is
/// never concurrent with queries on the same handle.
pub struct CourseIndex {
    provider: Box<dyn IEmbeddingProvider>,
    courses: Vec<CourseRecord>,
    embeddings: Vec<Vec<f32>>,
    cache: QueryCache,
    degradations: Vec<DegradationEvent>,
}

impl CourseIndex {
    /// Build an empty index around an injected provider.
    pub fn new(provider: Box<dyn IEmbeddingProvider>, config: &IndexConfig) -> Self {
        let cache = QueryCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        );
        Self {
            provider,
            courses: Vec::new(),
            embeddings: Vec::new(),
            cache,
            degradations: Vec::new(),
        }
    }

    /// Build an empty index with the provider the configuration selects.
    pub fn from_config(config: &IndexConfig) -> Self {
        let (provider, degradation) = providers::create_provider(config);
        let mut index = Self::new(provider, config);
        index.degradations.extend(degradation);
        index
    }

    /// Embed and store a corpus, replacing any previous contents.
    pub fn ingest(&mut self, courses: Vec<CourseRecord>) -> PathwayResult<()> {
        let texts: Vec<String> = courses.iter().map(CourseRecord::embedding_text).collect();
        let embeddings = self.provider.embed_batch(&texts)?;

        info!(
            courses = courses.len(),
            provider = self.provider.name(),
            semantic = self.provider.is_semantic(),
            "course corpus ingested"
        );
        self.courses = courses;
        self.embeddings = embeddings;
        Ok(())
    }

    /// Rank the corpus against a free-text query.
    ///
    /// Scores are cosine similarities accumulated in double precision
    /// and rounded to three decimals; ties keep ingestion order.
    /// `top_k` is clamped to the corpus size, and an empty index yields
    /// an empty list rather than an error.
    pub fn query(&self, text: &str, top_k: usize) -> PathwayResult<Vec<CourseMatch>> {
        if self.courses.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = self.embed_text(text)?;

        let mut scored: Vec<(usize, f64)> = self
            .embeddings
            .iter()
            .enumerate()
            .map(|(i, row)| (i, cosine_similarity(&query_embedding, row)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let take = top_k.min(scored.len());
        let hits = scored[..take]
            .iter()
            .map(|&(i, score)| CourseMatch {
                course: self.courses[i].clone(),
                match_score: round3(score),
            })
            .collect();

        debug!(top_k, returned = take, "course query served");
        Ok(hits)
    }

    /// Embed free text with the active provider, through the query cache.
    ///
    /// Exposed for callers that cluster or compare raw vectors rather
    /// than ranking the corpus.
    pub fn embed_text(&self, text: &str) -> PathwayResult<Vec<f32>> {
        let key = QueryCache::key(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!("query embedding cache hit");
            return Ok(hit);
        }
        let embedding = self.provider.embed(text)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    /// Whether match scores carry real semantic signal.
    pub fn is_semantic(&self) -> bool {
        self.provider.is_semantic()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Drain provider-selection degradation events.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.degradations)
    }
}

fn round3(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
