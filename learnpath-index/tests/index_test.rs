//! End-to-end index tests over a generated NSQF corpus: file loading,
//! ingest, ranking invariants, provider fallback.

use learnpath_core::config::IndexConfig;
use learnpath_core::models::load_courses;
use learnpath_index::{CourseIndex, MockEmbedder};

fn indexed_corpus(count: usize) -> CourseIndex {
    let config = IndexConfig::default();
    let mut index = CourseIndex::new(
        Box::new(MockEmbedder::new(config.embedding_dims, config.mock_seed)),
        &config,
    );
    index.ingest(test_fixtures::course_corpus(count, 42)).unwrap();
    index
}

#[test]
fn ranks_a_full_corpus_with_descending_scores() {
    let index = indexed_corpus(100);
    assert_eq!(index.len(), 100);

    let hits = index.query("python cloud computing courses", 5).unwrap();
    assert_eq!(hits.len(), 5);
    for pair in hits.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    for hit in &hits {
        assert!((-1.0..=1.0).contains(&hit.match_score));
        assert!(hit.course.id.starts_with("C-1"));
    }
}

#[test]
fn identical_configuration_reproduces_the_ranking() {
    let first = indexed_corpus(60).query("solar installation", 5).unwrap();
    let second = indexed_corpus(60).query("solar installation", 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn corpus_round_trips_through_a_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("courses.json");
    test_fixtures::write_corpus(&path, 40, 42);

    let config = IndexConfig::default();
    let mut index = CourseIndex::new(
        Box::new(MockEmbedder::new(config.embedding_dims, config.mock_seed)),
        &config,
    );
    index.ingest(load_courses(&path).unwrap()).unwrap();

    assert_eq!(index.len(), 40);
    assert_eq!(index.query("patient care", 3).unwrap().len(), 3);
    dir.close().unwrap();
}

#[test]
fn default_configuration_serves_mock_vectors() {
    let mut index = CourseIndex::from_config(&IndexConfig::default());
    assert!(!index.is_semantic());
    assert!(index.drain_degradation_events().is_empty());
}
