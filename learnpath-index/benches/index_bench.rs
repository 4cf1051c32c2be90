//! Criterion benchmarks for learnpath-index.
//!
//! Targets:
//! - Query over 500 courses (384-dim, cached embedding) < 2ms
//! - Cold query embedding (mock provider) < 0.5ms
//! - Ingest of 500 courses < 100ms

use criterion::{criterion_group, criterion_main, Criterion};

use learnpath_core::config::IndexConfig;
use learnpath_index::{CourseIndex, MockEmbedder};

fn build_index(count: usize) -> CourseIndex {
    let config = IndexConfig::default();
    let mut index = CourseIndex::new(
        Box::new(MockEmbedder::new(config.embedding_dims, config.mock_seed)),
        &config,
    );
    index
        .ingest(test_fixtures::course_corpus(count, 42))
        .unwrap();
    index
}

fn bench_query_500_courses(c: &mut Criterion) {
    let index = build_index(500);
    // Warm the embedding cache so iterations measure scoring and sorting.
    index.query("python data analysis", 5).unwrap();

    c.bench_function("query_500_courses_top5", |bench| {
        bench.iter(|| index.query("python data analysis", 5).unwrap());
    });
}

fn bench_cold_query_embedding(c: &mut Criterion) {
    let index = build_index(100);
    let mut tick = 0u64;

    c.bench_function("cold_query_embedding", |bench| {
        bench.iter(|| {
            // A fresh text every iteration defeats the cache.
            tick += 1;
            index.query(&format!("welding safety {tick}"), 5).unwrap()
        });
    });
}

fn bench_ingest_500_courses(c: &mut Criterion) {
    let config = IndexConfig::default();
    let corpus = test_fixtures::course_corpus(500, 42);

    c.bench_function("ingest_500_courses", |bench| {
        bench.iter(|| {
            let mut index = CourseIndex::new(
                Box::new(MockEmbedder::new(config.embedding_dims, config.mock_seed)),
                &config,
            );
            index.ingest(corpus.clone()).unwrap();
            index.len()
        });
    });
}

criterion_group!(
    benches,
    bench_query_500_courses,
    bench_cold_query_embedding,
    bench_ingest_500_courses,
);
criterion_main!(benches);
