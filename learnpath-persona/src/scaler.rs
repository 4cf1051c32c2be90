//! Per-dimension standardization of feature rows.

use serde::{Deserialize, Serialize};

use learnpath_core::errors::{PathwayResult, PersonaError};

/// Guard against dividing by a numerically-zero standard deviation.
const VARIANCE_EPSILON: f64 = 1e-12;

/// Standard scaler fitted on a training matrix.
///
/// `transform` subtracts the fitted mean and divides by the fitted
/// population standard deviation, per dimension. Zero-variance
/// dimensions are centered but left unscaled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit on row-major samples.
    pub fn fit(samples: &[Vec<f64>]) -> PathwayResult<Self> {
        let dims = check_matrix(samples)?;
        let n = samples.len() as f64;

        let mut means = vec![0.0; dims];
        for row in samples {
            for (d, value) in row.iter().enumerate() {
                means[d] += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut stds = vec![0.0; dims];
        for row in samples {
            for (d, value) in row.iter().enumerate() {
                let delta = value - means[d];
                stds[d] += delta * delta;
            }
        }
        for std in &mut stds {
            *std = (*std / n).sqrt();
            if *std < VARIANCE_EPSILON {
                *std = 1.0;
            }
        }

        Ok(Self { means, stds })
    }

    /// Standardize a single row.
    pub fn transform_row(&self, row: &[f64]) -> PathwayResult<Vec<f64>> {
        if row.len() != self.means.len() {
            return Err(PersonaError::DimensionMismatch {
                expected: self.means.len(),
                actual: row.len(),
            }
            .into());
        }
        Ok(row
            .iter()
            .enumerate()
            .map(|(d, value)| (value - self.means[d]) / self.stds[d])
            .collect())
    }

    /// Standardize a whole matrix.
    pub fn transform(&self, samples: &[Vec<f64>]) -> PathwayResult<Vec<Vec<f64>>> {
        samples.iter().map(|row| self.transform_row(row)).collect()
    }

    pub fn dimensions(&self) -> usize {
        self.means.len()
    }
}

/// Validate a non-empty row-major matrix with consistent row lengths.
/// Returns the shared dimensionality.
pub(crate) fn check_matrix(samples: &[Vec<f64>]) -> Result<usize, PersonaError> {
    let first = samples.first().ok_or_else(|| PersonaError::TrainingFailed {
        reason: "empty training set".to_string(),
    })?;
    let dims = first.len();
    if dims == 0 {
        return Err(PersonaError::TrainingFailed {
            reason: "zero-dimensional training rows".to_string(),
        });
    }
    if let Some(bad) = samples.iter().find(|row| row.len() != dims) {
        return Err(PersonaError::TrainingFailed {
            reason: format!("ragged training matrix: {} vs {} columns", bad.len(), dims),
        });
    }
    Ok(dims)
}
