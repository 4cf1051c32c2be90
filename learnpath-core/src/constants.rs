/// LearnPath system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dimensionality of the behavioral feature vector.
pub const FEATURE_DIMS: usize = 6;

/// Years of experience mapped linearly onto [0, 1].
pub const EXPERIENCE_CAP_YEARS: f64 = 5.0;

/// Skill count normalized against this ceiling.
pub const SKILL_COUNT_CAP: f64 = 10.0;

/// Average score assumed when the profile omits or mistypes it.
pub const DEFAULT_AVG_SCORE: f64 = 0.5;

/// Market demand assumed for unrecognized career goals.
pub const DEFAULT_MARKET_DEMAND: f64 = 0.6;

/// Schema version stamped into persisted model artifacts.
pub const ARTIFACT_SCHEMA_VERSION: u32 = 1;
