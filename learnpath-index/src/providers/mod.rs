//! Embedding providers and construction-time provider selection.

pub mod mock;
pub mod onnx;

pub use mock::MockEmbedder;
pub use onnx::OnnxEmbedder;

use tracing::{info, warn};

use learnpath_core::config::IndexConfig;
use learnpath_core::models::DegradationEvent;
use learnpath_core::traits::IEmbeddingProvider;

/// Build the provider the configuration asks for.
///
/// A configured encoder that fails to load is not fatal: the mock
/// provider takes over, and the degradation event is returned alongside
/// so callers can surface the reduced match quality.
pub fn create_provider(
    config: &IndexConfig,
) -> (Box<dyn IEmbeddingProvider>, Option<DegradationEvent>) {
    let Some(path) = &config.onnx_model_path else {
        return (
            Box::new(MockEmbedder::new(config.embedding_dims, config.mock_seed)),
            None,
        );
    };

    match OnnxEmbedder::load(path, config.embedding_dims) {
        Ok(provider) => {
            info!(model = provider.name(), "semantic embedding provider ready");
            (Box::new(provider), None)
        }
        Err(e) => {
            warn!(error = %e, "encoder load failed, serving mock vectors");
            let event = DegradationEvent::now("course-index", &e.to_string(), "mock-embedder");
            (
                Box::new(MockEmbedder::new(config.embedding_dims, config.mock_seed)),
                Some(event),
            )
        }
    }
}
