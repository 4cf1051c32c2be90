//! # learnpath-persona
//!
//! Learner persona clustering for the learnpath workspace.
//!
//! A [`PersonaModel`] standardizes feature rows, optionally reduces
//! high-dimensional inputs with PCA, and assigns each row to the
//! nearest k-means centroid. All three stages persist as versioned
//! JSON artifacts under a model directory so a restarted process
//! serves the same personas without retraining.

pub mod artifacts;
pub mod bootstrap;
pub mod kmeans;
pub mod model;
pub mod pca;
pub mod scaler;

pub use kmeans::{KMeans, KMeansParams};
pub use model::PersonaModel;
pub use pca::PcaReducer;
pub use scaler::StandardScaler;
