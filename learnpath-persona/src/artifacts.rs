//! Persisted model artifacts: versioned JSON envelopes on disk.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use learnpath_core::constants::ARTIFACT_SCHEMA_VERSION;
use learnpath_core::errors::{PathwayResult, PersonaError};

pub const SCALER_FILE: &str = "scaler.json";
pub const KMEANS_FILE: &str = "kmeans.json";
pub const PCA_FILE: &str = "pca.json";

/// Versioned wrapper around a persisted model component.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    model: T,
}

/// Write a component under the model directory.
///
/// The payload lands in a sibling temp file first and is renamed into
/// place, so a crash mid-write never leaves a truncated artifact.
pub fn save<T: Serialize>(dir: &Path, file: &str, model: &T) -> PathwayResult<()> {
    fs::create_dir_all(dir)?;
    let envelope = Envelope {
        schema_version: ARTIFACT_SCHEMA_VERSION,
        saved_at: Utc::now(),
        model,
    };
    let raw = serde_json::to_vec_pretty(&envelope)?;

    let path = dir.join(file);
    let tmp = dir.join(format!("{file}.tmp"));
    fs::write(&tmp, raw)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

/// Load a component, verifying the schema version.
///
/// Missing and unreadable artifacts come back as typed errors; the
/// caller decides whether that means retrain.
pub fn load<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, PersonaError> {
    let path = dir.join(file);
    if !path.exists() {
        return Err(PersonaError::ArtifactMissing {
            path: path.display().to_string(),
        });
    }
    let raw = fs::read_to_string(&path).map_err(|e| PersonaError::ArtifactCorrupt {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let envelope: Envelope<T> =
        serde_json::from_str(&raw).map_err(|e| PersonaError::ArtifactCorrupt {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    if envelope.schema_version != ARTIFACT_SCHEMA_VERSION {
        return Err(PersonaError::SchemaMismatch {
            found: envelope.schema_version,
            expected: ARTIFACT_SCHEMA_VERSION,
        });
    }
    Ok(envelope.model)
}

/// True when the artifact file is present on disk.
pub fn exists(dir: &Path, file: &str) -> bool {
    dir.join(file).exists()
}

/// Remove an artifact if present. Used to drop stale optional stages.
pub fn remove(dir: &Path, file: &str) -> PathwayResult<()> {
    match fs::remove_file(dir.join(file)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
