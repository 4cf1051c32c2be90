//! Persona model lifecycle: load, train, predict.

use std::path::Path;

use tracing::{info, warn};

use learnpath_core::config::PersonaConfig;
use learnpath_core::errors::{PathwayResult, PersonaError};

use crate::artifacts;
use crate::bootstrap;
use crate::kmeans::{KMeans, KMeansParams};
use crate::pca::PcaReducer;
use crate::scaler::StandardScaler;

/// A trained persona model.
///
/// Immutable after construction: callers share it read-only, and any
/// retraining builds a fresh instance. Prediction never trains.
#[derive(Debug, Clone)]
pub struct PersonaModel {
    scaler: StandardScaler,
    reducer: Option<PcaReducer>,
    kmeans: KMeans,
}

impl PersonaModel {
    /// Load the persisted model, or train on the synthetic learner
    /// dataset when the artifacts are missing, corrupt, version-skewed,
    /// or fitted for a different cluster count.
    pub fn load_or_train(config: &PersonaConfig) -> PathwayResult<Self> {
        let dataset = bootstrap::feature_dataset(config.bootstrap_samples, config.random_seed);
        Self::load_or_train_on(config, &dataset)
    }

    /// Same lifecycle as [`load_or_train`](Self::load_or_train) but
    /// with a caller-supplied training matrix. The embedding-space
    /// persona path uses this with uniform high-dimensional rows.
    pub fn load_or_train_on(config: &PersonaConfig, samples: &[Vec<f64>]) -> PathwayResult<Self> {
        let dims = samples.first().map(Vec::len).unwrap_or(0);
        match Self::load(&config.model_dir) {
            Ok(model) if model.clusters() == config.clusters && model.input_dimensions() == dims => {
                info!(
                    dir = %config.model_dir.display(),
                    clusters = model.clusters(),
                    reduced = model.is_reduced(),
                    "persona model loaded from artifacts"
                );
                return Ok(model);
            }
            Ok(model) => {
                warn!(
                    found_clusters = model.clusters(),
                    expected_clusters = config.clusters,
                    found_dims = model.input_dimensions(),
                    expected_dims = dims,
                    "persisted model shape differs from configuration, retraining"
                );
            }
            Err(e) => {
                warn!(error = %e, "persona artifacts unusable, retraining");
            }
        }
        Self::train(samples, config)
    }

    /// Train every stage on the given samples and persist the artifacts.
    pub fn train(samples: &[Vec<f64>], config: &PersonaConfig) -> PathwayResult<Self> {
        let scaler = StandardScaler::fit(samples)?;
        let scaled = scaler.transform(samples)?;

        let (reducer, clustering_input) = if scaler.dimensions() > config.reduction_threshold {
            let reducer = PcaReducer::fit(&scaled, config.reduced_dims, config.random_seed)?;
            let reduced = reducer.transform(&scaled)?;
            (Some(reducer), reduced)
        } else {
            (None, scaled)
        };

        let params = KMeansParams {
            k: config.clusters,
            max_iterations: config.max_iterations,
            convergence_threshold: config.convergence_threshold,
            seed: config.random_seed,
        };
        let kmeans = KMeans::fit(&clustering_input, &params)?;

        artifacts::save(&config.model_dir, artifacts::SCALER_FILE, &scaler)?;
        artifacts::save(&config.model_dir, artifacts::KMEANS_FILE, &kmeans)?;
        match &reducer {
            Some(reducer) => artifacts::save(&config.model_dir, artifacts::PCA_FILE, reducer)?,
            // A reducer from an earlier high-dimensional fit must not
            // shadow this model on the next load.
            None => artifacts::remove(&config.model_dir, artifacts::PCA_FILE)?,
        }

        info!(
            clusters = config.clusters,
            input_dims = scaler.dimensions(),
            reduced = reducer.is_some(),
            samples = samples.len(),
            dir = %config.model_dir.display(),
            "persona model trained and persisted"
        );
        Ok(Self {
            scaler,
            reducer,
            kmeans,
        })
    }

    fn load(dir: &Path) -> Result<Self, PersonaError> {
        let scaler: StandardScaler = artifacts::load(dir, artifacts::SCALER_FILE)?;
        let kmeans: KMeans = artifacts::load(dir, artifacts::KMEANS_FILE)?;
        let reducer: Option<PcaReducer> = if artifacts::exists(dir, artifacts::PCA_FILE) {
            Some(artifacts::load(dir, artifacts::PCA_FILE)?)
        } else {
            None
        };

        let coherent = match &reducer {
            Some(reducer) => {
                reducer.input_dimensions() == scaler.dimensions()
                    && kmeans.dimensions() == reducer.output_dimensions()
            }
            None => kmeans.dimensions() == scaler.dimensions(),
        };
        if !coherent {
            return Err(PersonaError::ArtifactCorrupt {
                path: dir.display().to_string(),
                reason: "persisted stages disagree on dimensionality".to_string(),
            });
        }

        Ok(Self {
            scaler,
            reducer,
            kmeans,
        })
    }

    /// Persona id for a raw feature row: scale, reduce when the model
    /// carries a reducer, then assign to the nearest centroid.
    pub fn predict(&self, features: &[f64]) -> PathwayResult<usize> {
        let scaled = self.scaler.transform_row(features)?;
        let row = match &self.reducer {
            Some(reducer) => reducer.transform_row(&scaled)?,
            None => scaled,
        };
        self.kmeans.predict(&row)
    }

    pub fn clusters(&self) -> usize {
        self.kmeans.k()
    }

    /// Dimensionality `predict` expects.
    pub fn input_dimensions(&self) -> usize {
        self.scaler.dimensions()
    }

    pub fn is_reduced(&self) -> bool {
        self.reducer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_core::constants::FEATURE_DIMS;
    use tempfile::tempdir;

    fn config(dir: &Path) -> PersonaConfig {
        PersonaConfig {
            model_dir: dir.to_path_buf(),
            ..PersonaConfig::default()
        }
    }

    #[test]
    fn training_persists_scaler_and_kmeans_but_no_reducer() {
        let dir = tempdir().unwrap();
        let model = PersonaModel::load_or_train(&config(dir.path())).unwrap();

        assert_eq!(model.clusters(), 3);
        assert_eq!(model.input_dimensions(), FEATURE_DIMS);
        assert!(!model.is_reduced());
        assert!(artifacts::exists(dir.path(), artifacts::SCALER_FILE));
        assert!(artifacts::exists(dir.path(), artifacts::KMEANS_FILE));
        assert!(!artifacts::exists(dir.path(), artifacts::PCA_FILE));
        dir.close().unwrap();
    }

    #[test]
    fn high_dimensional_training_fits_a_reducer() {
        let dir = tempdir().unwrap();
        let config = PersonaConfig {
            model_dir: dir.path().to_path_buf(),
            clusters: 5,
            ..PersonaConfig::default()
        };
        let samples = bootstrap::embedding_dataset(120, 64, config.random_seed);
        let model = PersonaModel::load_or_train_on(&config, &samples).unwrap();

        assert!(model.is_reduced());
        assert_eq!(model.input_dimensions(), 64);
        assert_eq!(model.clusters(), 5);
        assert!(artifacts::exists(dir.path(), artifacts::PCA_FILE));
        dir.close().unwrap();
    }

    #[test]
    fn predict_is_idempotent() {
        let dir = tempdir().unwrap();
        let model = PersonaModel::load_or_train(&config(dir.path())).unwrap();
        let row = [0.55, 0.2, 0.4, 0.6, 0.9, 0.0];
        let first = model.predict(&row).unwrap();
        for _ in 0..5 {
            assert_eq!(model.predict(&row).unwrap(), first);
        }
        dir.close().unwrap();
    }

    #[test]
    fn predictions_stay_within_cluster_range() {
        let dir = tempdir().unwrap();
        let model = PersonaModel::load_or_train(&config(dir.path())).unwrap();
        for row in bootstrap::feature_dataset(60, 9) {
            assert!(model.predict(&row).unwrap() < model.clusters());
        }
        dir.close().unwrap();
    }

    #[test]
    fn predict_rejects_wrong_dimensionality() {
        let dir = tempdir().unwrap();
        let model = PersonaModel::load_or_train(&config(dir.path())).unwrap();
        let err = model.predict(&[0.5, 0.5]).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
        dir.close().unwrap();
    }

    #[test]
    fn cluster_count_change_triggers_retrain() {
        let dir = tempdir().unwrap();
        PersonaModel::load_or_train(&config(dir.path())).unwrap();

        let widened = PersonaConfig {
            clusters: 4,
            ..config(dir.path())
        };
        let model = PersonaModel::load_or_train(&widened).unwrap();
        assert_eq!(model.clusters(), 4);
        dir.close().unwrap();
    }
}
