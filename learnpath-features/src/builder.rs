//! Feature vector assembly from one learner request.

use std::collections::BTreeSet;

use tracing::debug;

use learnpath_core::constants::{DEFAULT_AVG_SCORE, EXPERIENCE_CAP_YEARS, SKILL_COUNT_CAP};
use learnpath_core::knowledge::KnowledgeBase;
use learnpath_core::models::{FeatureVector, UserProfile};

use crate::aspiration::normalize_aspiration;
use crate::extractor::extract_skills;
use crate::normalize::{clamp01, normalize};

/// Builds bounded feature vectors from raw learner input.
///
/// Stateless apart from the injected knowledge tables: the same inputs
/// always produce the same vector.
pub struct FeatureBuilder<'a> {
    knowledge: &'a KnowledgeBase,
}

impl<'a> FeatureBuilder<'a> {
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Convert one learner request into the six-dimensional vector.
    pub fn build(
        &self,
        profile: &UserProfile,
        current_skills: &[String],
        aspiration: &str,
    ) -> FeatureVector {
        // Step 1: numeric profile fields, defaulting whatever is absent
        // or non-numeric.
        let avg_score = clamp01(profile.avg_score_f64().unwrap_or(DEFAULT_AVG_SCORE));
        let experience_level = normalize(
            profile.experience_years_f64().unwrap_or(0.0),
            0.0,
            EXPERIENCE_CAP_YEARS,
        );

        // Step 2: skill extraction from every text the request carries.
        let mut extracted_skills: BTreeSet<String> = current_skills
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_lowercase())
            .collect();
        let vocab = self.knowledge.vocabulary();
        extracted_skills.extend(extract_skills(aspiration, vocab));
        if let Some(bio) = profile.bio.as_deref() {
            extracted_skills.extend(extract_skills(bio, vocab));
        }
        extracted_skills.extend(extract_skills(&profile.projects_text(), vocab));

        let skill_count = normalize(extracted_skills.len() as f64, 0.0, SKILL_COUNT_CAP);

        // Step 3: role normalization and market demand.
        let role = normalize_aspiration(aspiration, self.knowledge);
        let market_demand = self.knowledge.market_demand(&role);

        // Step 4: coverage against the role's required skills.
        let required = self.knowledge.required_skills(&role);
        let (skill_coverage_ratio, missing_skills_count) = coverage(required, &extracted_skills);

        debug!(
            role = %role,
            skills = extracted_skills.len(),
            coverage = skill_coverage_ratio,
            "feature vector built"
        );

        FeatureVector {
            avg_score,
            experience_level,
            skill_count,
            market_demand,
            skill_coverage_ratio,
            missing_skills_count,
            extracted_skills,
            role,
        }
    }
}

/// Coverage ratio and normalized missing count against a required list.
///
/// A required skill counts as matched when it contains, or is contained
/// by, any extracted skill.
fn coverage(required: &[String], extracted: &BTreeSet<String>) -> (f64, f64) {
    if required.is_empty() {
        return (0.0, 0.0);
    }
    let matched = required
        .iter()
        .filter(|req| {
            extracted
                .iter()
                .any(|s| s.contains(req.as_str()) || req.contains(s.as_str()))
        })
        .count();
    let ratio = matched as f64 / required.len() as f64;
    let missing = (required.len() - matched) as f64;
    (ratio, normalize(missing, 0.0, required.len() as f64))
}
