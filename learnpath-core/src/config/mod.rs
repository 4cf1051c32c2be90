//! Per-subsystem configuration, composable from TOML.

pub mod defaults;

mod index_config;
mod pathway_config;
mod persona_config;

pub use index_config::IndexConfig;
pub use pathway_config::{PathwayConfig, RetrievalStrategy};
pub use persona_config::PersonaConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnPathConfig {
    pub persona: PersonaConfig,
    pub index: IndexConfig,
    pub pathway: PathwayConfig,
}

impl LearnPathConfig {
    /// Parse a configuration from a TOML string. Missing sections and
    /// fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
