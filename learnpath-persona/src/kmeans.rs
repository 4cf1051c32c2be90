//! Fixed-k clustering with seeded k-means++ initialization and Lloyd
//! iteration.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use learnpath_core::errors::{PathwayResult, PersonaError};

use crate::scaler::check_matrix;

/// Training parameters for [`KMeans::fit`].
#[derive(Debug, Clone)]
pub struct KMeansParams {
    pub k: usize,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
    pub seed: u64,
}

/// A fitted k-means model. Only the centroids survive training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeans {
    centroids: Vec<Vec<f64>>,
}

impl KMeans {
    /// Fit on row-major samples.
    ///
    /// Initialization is k-means++ driven by a seeded generator, so a
    /// fixed seed reproduces the same centroids on the same data. The
    /// Lloyd loop stops when no centroid moves farther than the
    /// convergence threshold or the iteration cap is reached.
    pub fn fit(samples: &[Vec<f64>], params: &KMeansParams) -> PathwayResult<Self> {
        let dims = check_matrix(samples)?;
        if params.k == 0 {
            return Err(PersonaError::TrainingFailed {
                reason: "cluster count must be positive".to_string(),
            }
            .into());
        }
        if params.k > samples.len() {
            return Err(PersonaError::TrainingFailed {
                reason: format!(
                    "cannot fit {} clusters on {} samples",
                    params.k,
                    samples.len()
                ),
            }
            .into());
        }

        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let mut centroids = plus_plus_init(samples, params.k, &mut rng);
        let mut assignments = vec![0usize; samples.len()];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < params.max_iterations {
            iterations += 1;

            for (i, row) in samples.iter().enumerate() {
                assignments[i] = nearest(&centroids, row).0;
            }

            let next = recompute_centroids(samples, &assignments, &centroids);
            let movement = max_movement(&centroids, &next);
            centroids = next;

            if movement < params.convergence_threshold {
                converged = true;
                break;
            }
        }

        debug!(
            k = params.k,
            dims,
            samples = samples.len(),
            iterations,
            converged,
            "k-means fit finished"
        );
        Ok(Self { centroids })
    }

    /// Index of the nearest centroid for a row.
    pub fn predict(&self, row: &[f64]) -> PathwayResult<usize> {
        let dims = self.dimensions();
        if row.len() != dims {
            return Err(PersonaError::DimensionMismatch {
                expected: dims,
                actual: row.len(),
            }
            .into());
        }
        Ok(nearest(&self.centroids, row).0)
    }

    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    pub fn dimensions(&self) -> usize {
        self.centroids.first().map(Vec::len).unwrap_or(0)
    }

    pub fn centroids(&self) -> &[Vec<f64>] {
        &self.centroids
    }

    /// Within-cluster sum of squares over the given samples.
    pub fn inertia(&self, samples: &[Vec<f64>]) -> f64 {
        samples
            .iter()
            .map(|row| nearest(&self.centroids, row).1)
            .sum()
    }
}

/// k-means++ seeding: the first centroid is drawn uniformly, each
/// subsequent one with probability proportional to its squared
/// distance from the nearest already-chosen centroid.
fn plus_plus_init(samples: &[Vec<f64>], k: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<f64>> {
    let n = samples.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(samples[rng.gen_range(0..n)].clone());

    let mut min_d2 = vec![f64::MAX; n];
    while centroids.len() < k {
        let latest = &centroids[centroids.len() - 1];
        for (i, row) in samples.iter().enumerate() {
            let d2 = distance_squared(row, latest);
            if d2 < min_d2[i] {
                min_d2[i] = d2;
            }
        }

        let total: f64 = min_d2.iter().sum();
        let chosen = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut idx = n - 1;
            for (i, d2) in min_d2.iter().enumerate() {
                if target <= *d2 {
                    idx = i;
                    break;
                }
                target -= d2;
            }
            idx
        } else {
            // Every sample coincides with a centroid already.
            centroids.len() % n
        };
        centroids.push(samples[chosen].clone());
    }
    centroids
}

fn recompute_centroids(
    samples: &[Vec<f64>],
    assignments: &[usize],
    previous: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let dims = previous[0].len();
    let mut sums = vec![vec![0.0; dims]; previous.len()];
    let mut counts = vec![0usize; previous.len()];

    for (row, &cluster) in samples.iter().zip(assignments) {
        counts[cluster] += 1;
        for (d, value) in row.iter().enumerate() {
            sums[cluster][d] += value;
        }
    }

    sums.into_iter()
        .zip(counts)
        .enumerate()
        .map(|(cluster, (sum, count))| {
            if count == 0 {
                // An emptied cluster keeps its previous centroid.
                previous[cluster].clone()
            } else {
                sum.into_iter().map(|v| v / count as f64).collect()
            }
        })
        .collect()
}

fn max_movement(before: &[Vec<f64>], after: &[Vec<f64>]) -> f64 {
    before
        .iter()
        .zip(after)
        .map(|(a, b)| distance_squared(a, b).sqrt())
        .fold(0.0, f64::max)
}

fn nearest(centroids: &[Vec<f64>], row: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::MAX);
    for (i, centroid) in centroids.iter().enumerate() {
        let d2 = distance_squared(centroid, row);
        if d2 < best.1 {
            best = (i, d2);
        }
    }
    best
}

fn distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let delta = x - y;
            delta * delta
        })
        .sum()
}
