//! # learnpath-core
//!
//! Foundation crate for the LearnPath recommender.
//! Defines all types, traits, errors, config, constants, and the static
//! knowledge tables. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod knowledge;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LearnPathConfig;
pub use errors::{PathwayError, PathwayResult};
pub use knowledge::KnowledgeBase;
pub use models::{CourseMatch, CourseRecord, FeatureVector, LearningPathway, UserProfile};
