//! Static knowledge tables: skill vocabulary, role profiles, roadmaps.
//!
//! Everything here is read-only for the process lifetime. Consumers take
//! a `KnowledgeBase` by reference instead of reaching for module globals,
//! so alternative tables can be swapped in for tests or future data
//! sources.

mod roadmaps;
mod roles;
mod skills;

pub use roadmaps::{persona_theme, PersonaRoadmap, RoadmapTable};
pub use roles::{RoleProfile, DEFAULT_CATALOG_KEY};
pub use skills::SkillVocabulary;

use crate::constants::DEFAULT_MARKET_DEMAND;

/// The injected bundle of knowledge tables the pipeline consults.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    vocabulary: SkillVocabulary,
    roles: Vec<RoleProfile>,
    catalog_keys: Vec<(String, String)>,
    roadmaps: RoadmapTable,
}

impl KnowledgeBase {
    /// The builtin tables.
    pub fn builtin() -> Self {
        Self {
            vocabulary: SkillVocabulary::builtin(),
            roles: roles::builtin_roles(),
            catalog_keys: roles::builtin_catalog_keys(),
            roadmaps: RoadmapTable::builtin(),
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Roles in table order. The order is the normalizer's match order.
    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn role(&self, name: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Market demand for a role, defaulting for unrecognized names.
    pub fn market_demand(&self, role: &str) -> f64 {
        self.role(role)
            .map(|r| r.market_demand)
            .unwrap_or(DEFAULT_MARKET_DEMAND)
    }

    /// Required skills for a role. Empty for unrecognized names.
    pub fn required_skills(&self, role: &str) -> &[String] {
        self.role(role).map(|r| r.required_skills.as_slice()).unwrap_or(&[])
    }

    /// Curated catalog key for a role, with the table default.
    pub fn catalog_key(&self, role: &str) -> &str {
        self.catalog_keys
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, key)| key.as_str())
            .unwrap_or(DEFAULT_CATALOG_KEY)
    }

    pub fn roadmaps(&self) -> &RoadmapTable {
        &self.roadmaps
    }
}
