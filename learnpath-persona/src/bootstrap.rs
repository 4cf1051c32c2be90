//! Deterministic synthetic training data for first-run model fitting.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use learnpath_core::constants::FEATURE_DIMS;

/// Per-population linear transforms over uniform noise. Columns match
/// the feature-vector order: avg_score, experience_level, skill_count,
/// market_demand, skill_coverage_ratio, missing_skills_count.
const BEGINNER_SCALE: [f64; FEATURE_DIMS] = [0.35, 0.25, 0.2, 1.0, 0.3, 0.6];
const BEGINNER_OFFSET: [f64; FEATURE_DIMS] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.3];

const INTERMEDIATE_SCALE: [f64; FEATURE_DIMS] = [0.25, 0.35, 0.4, 1.0, 0.5, 0.4];
const INTERMEDIATE_OFFSET: [f64; FEATURE_DIMS] = [0.35, 0.2, 0.2, 0.0, 0.2, 0.1];

const ADVANCED_SCALE: [f64; FEATURE_DIMS] = [0.25, 0.3, 0.4, 1.0, 0.3, 0.2];
const ADVANCED_OFFSET: [f64; FEATURE_DIMS] = [0.65, 0.5, 0.5, 0.0, 0.5, 0.0];

/// Synthesize the three-population learner feature dataset.
///
/// `n` rows split evenly across beginner, intermediate, and advanced
/// bands, remainder going to the advanced band. Every value is clamped
/// to `[0, 1]`. A fixed seed reproduces the same rows.
pub fn feature_dataset(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n1 = n / 3;
    let n2 = n / 3;
    let n3 = n - n1 - n2;

    let mut rows = Vec::with_capacity(n);
    push_population(&mut rows, n1, &BEGINNER_SCALE, &BEGINNER_OFFSET, &mut rng);
    push_population(
        &mut rows,
        n2,
        &INTERMEDIATE_SCALE,
        &INTERMEDIATE_OFFSET,
        &mut rng,
    );
    push_population(&mut rows, n3, &ADVANCED_SCALE, &ADVANCED_OFFSET, &mut rng);
    rows
}

fn push_population(
    rows: &mut Vec<Vec<f64>>,
    count: usize,
    scale: &[f64; FEATURE_DIMS],
    offset: &[f64; FEATURE_DIMS],
    rng: &mut ChaCha8Rng,
) {
    for _ in 0..count {
        rows.push(
            (0..FEATURE_DIMS)
                .map(|d| (rng.gen::<f64>() * scale[d] + offset[d]).clamp(0.0, 1.0))
                .collect(),
        );
    }
}

/// Uniform random rows for fitting the embedding-space persona model.
pub fn embedding_dataset(n: usize, dims: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dims).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_requested_shape() {
        let rows = feature_dataset(600, 42);
        assert_eq!(rows.len(), 600);
        assert!(rows.iter().all(|row| row.len() == FEATURE_DIMS));
    }

    #[test]
    fn remainder_rows_go_to_the_advanced_band() {
        assert_eq!(feature_dataset(10, 42).len(), 10);
        assert_eq!(feature_dataset(601, 42).len(), 601);
    }

    #[test]
    fn every_value_is_bounded() {
        for row in feature_dataset(600, 42) {
            for value in row {
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn same_seed_reproduces_rows() {
        assert_eq!(feature_dataset(90, 7), feature_dataset(90, 7));
        assert_ne!(feature_dataset(90, 7), feature_dataset(90, 8));
    }

    #[test]
    fn populations_are_ordered_by_average_score() {
        let rows = feature_dataset(600, 42);
        let band_mean = |range: std::ops::Range<usize>| {
            rows[range.clone()].iter().map(|r| r[0]).sum::<f64>() / range.len() as f64
        };
        let beginner = band_mean(0..200);
        let advanced = band_mean(400..600);
        assert!(beginner < 0.35);
        assert!(advanced > 0.65);
    }

    #[test]
    fn embedding_rows_are_uniform_and_bounded() {
        let rows = embedding_dataset(20, 384, 42);
        assert_eq!(rows.len(), 20);
        assert!(rows.iter().all(|row| row.len() == 384));
        assert!(rows
            .iter()
            .flatten()
            .all(|value| (0.0..1.0).contains(value)));
    }
}
