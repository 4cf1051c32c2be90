//! Principal component reduction for high-dimensional feature rows.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use learnpath_core::errors::{PathwayResult, PersonaError};

use crate::scaler::check_matrix;

const POWER_ITERATION_CAP: usize = 500;
const POWER_ITERATION_TOLERANCE: f64 = 1e-12;

/// PCA reducer fitted on standardized training data.
///
/// Components come from power iteration with deflation on the sample
/// covariance matrix. That is enough for the few hundred input
/// dimensions this pipeline reduces; it is not a general eigensolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcaReducer {
    mean: Vec<f64>,
    /// Principal axes, one unit-length component per row.
    components: Vec<Vec<f64>>,
    eigenvalues: Vec<f64>,
}

impl PcaReducer {
    /// Fit on row-major samples, extracting `n_components` axes.
    pub fn fit(samples: &[Vec<f64>], n_components: usize, seed: u64) -> PathwayResult<Self> {
        let dims = check_matrix(samples)?;
        if n_components == 0 || n_components > dims || n_components > samples.len() {
            return Err(PersonaError::TrainingFailed {
                reason: format!(
                    "cannot extract {} components from a {}x{} matrix",
                    n_components,
                    samples.len(),
                    dims
                ),
            }
            .into());
        }

        let n = samples.len() as f64;
        let mut mean = vec![0.0; dims];
        for row in samples {
            for (d, value) in row.iter().enumerate() {
                mean[d] += value;
            }
        }
        for value in &mut mean {
            *value /= n;
        }

        let mut covariance = vec![vec![0.0; dims]; dims];
        for row in samples {
            let centered: Vec<f64> = row.iter().zip(&mean).map(|(v, m)| v - m).collect();
            for (i, a) in centered.iter().enumerate() {
                for (j, b) in centered.iter().enumerate().skip(i) {
                    covariance[i][j] += a * b;
                }
            }
        }
        for i in 0..dims {
            for j in i..dims {
                covariance[i][j] /= n;
                covariance[j][i] = covariance[i][j];
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut components = Vec::with_capacity(n_components);
        let mut eigenvalues = Vec::with_capacity(n_components);
        for _ in 0..n_components {
            let (axis, eigenvalue) = dominant_eigenvector(&covariance, &mut rng);
            deflate(&mut covariance, &axis, eigenvalue);
            components.push(axis);
            eigenvalues.push(eigenvalue);
        }

        debug!(
            input_dims = dims,
            output_dims = n_components,
            samples = samples.len(),
            "pca reducer fitted"
        );
        Ok(Self {
            mean,
            components,
            eigenvalues,
        })
    }

    /// Project a row onto the fitted components.
    pub fn transform_row(&self, row: &[f64]) -> PathwayResult<Vec<f64>> {
        if row.len() != self.mean.len() {
            return Err(PersonaError::DimensionMismatch {
                expected: self.mean.len(),
                actual: row.len(),
            }
            .into());
        }
        let centered: Vec<f64> = row.iter().zip(&self.mean).map(|(v, m)| v - m).collect();
        Ok(self
            .components
            .iter()
            .map(|axis| dot(axis, &centered))
            .collect())
    }

    /// Project a whole matrix.
    pub fn transform(&self, samples: &[Vec<f64>]) -> PathwayResult<Vec<Vec<f64>>> {
        samples.iter().map(|row| self.transform_row(row)).collect()
    }

    pub fn input_dimensions(&self) -> usize {
        self.mean.len()
    }

    pub fn output_dimensions(&self) -> usize {
        self.components.len()
    }

    /// Variance captured by each component, in extraction order.
    pub fn explained_variance(&self) -> &[f64] {
        &self.eigenvalues
    }
}

/// Power iteration for the dominant eigenpair of a symmetric matrix.
fn dominant_eigenvector(matrix: &[Vec<f64>], rng: &mut ChaCha8Rng) -> (Vec<f64>, f64) {
    let dims = matrix.len();
    let mut v: Vec<f64> = (0..dims).map(|_| rng.gen::<f64>() - 0.5).collect();
    normalize(&mut v);

    for _ in 0..POWER_ITERATION_CAP {
        let mut next = multiply(matrix, &v);
        let norm = dot(&next, &next).sqrt();
        if norm < POWER_ITERATION_TOLERANCE {
            // No variance left along any direction; keep the current axis.
            break;
        }
        for value in &mut next {
            *value /= norm;
        }
        let shift: f64 = next
            .iter()
            .zip(&v)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        v = next;
        if shift < POWER_ITERATION_TOLERANCE {
            break;
        }
    }

    let eigenvalue = dot(&v, &multiply(matrix, &v));
    (v, eigenvalue)
}

fn deflate(matrix: &mut [Vec<f64>], axis: &[f64], eigenvalue: f64) {
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value -= eigenvalue * axis[i] * axis[j];
        }
    }
}

fn multiply(matrix: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    matrix.iter().map(|row| dot(row, v)).collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn normalize(v: &mut [f64]) {
    let norm = dot(v, v).sqrt();
    if norm > 0.0 {
        for value in v.iter_mut() {
            *value /= norm;
        }
    }
}
