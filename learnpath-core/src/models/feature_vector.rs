use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_DIMS;

/// Numeric behavioral profile derived from one learner request.
///
/// Every numeric field is clamped to [0, 1], so vectors are directly
/// comparable and safe to feed to the persona model without re-scaling.
/// Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Academic / assessment performance.
    pub avg_score: f64,
    /// Years of experience mapped linearly onto [0, 1] (capped at 5).
    pub experience_level: f64,
    /// Extracted skill count normalized against a ceiling of 10.
    pub skill_count: f64,
    /// Market demand of the normalized target role.
    pub market_demand: f64,
    /// Fraction of the target role's required skills the learner has.
    pub skill_coverage_ratio: f64,
    /// Normalized count of required skills the learner lacks.
    pub missing_skills_count: f64,
    /// Deduplicated lowercase skills found anywhere in the request.
    pub extracted_skills: BTreeSet<String>,
    /// Canonical role name. Empty when the aspiration is unrecognized.
    pub role: String,
}

impl FeatureVector {
    /// The numeric fields in model order.
    pub fn as_array(&self) -> [f64; FEATURE_DIMS] {
        [
            self.avg_score,
            self.experience_level,
            self.skill_count,
            self.market_demand,
            self.skill_coverage_ratio,
            self.missing_skills_count,
        ]
    }

    /// True when every numeric field lies in [0, 1].
    pub fn is_bounded(&self) -> bool {
        self.as_array().iter().all(|v| (0.0..=1.0).contains(v))
    }
}
