//! # learnpath-features
//!
//! Turns raw learner input (loose profile, skill list, free-text career
//! aspiration) into the six-dimensional bounded feature vector the
//! persona model consumes.

pub mod aspiration;
pub mod builder;
pub mod extractor;
pub mod normalize;

pub use builder::FeatureBuilder;
