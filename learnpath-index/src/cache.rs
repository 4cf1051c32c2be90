//! In-memory cache for query embeddings.
//!
//! TinyLFU admission policy, bounded capacity, per-entry TTL. Repeat
//! queries skip the provider entirely.

use std::time::Duration;

use moka::sync::Cache;

/// Moka-backed query-embedding cache.
///
/// Keys are blake3 hashes of the query text, values are embedding
/// vectors.
pub struct QueryCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryCache {
    /// Create a cache with the given entry capacity and TTL.
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Cache key for a query text.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
