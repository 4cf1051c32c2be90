use serde::{Deserialize, Serialize};

use super::course::CourseMatch;
use super::user_profile::UserProfile;

/// One inference request as received at the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathwayRequest {
    pub user_profile: UserProfile,
    pub current_skills: Vec<String>,
    pub career_aspiration: String,
}

/// A curated course reference from the hand-maintained catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedCourse {
    pub title: String,
    pub platform: String,
    pub url: String,
}

/// A recommended course from either retrieval strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendedCourse {
    Curated(CuratedCourse),
    Semantic(CourseMatch),
}

/// The assembled learning pathway returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathway {
    pub cluster_id: usize,
    pub cluster_label: String,
    /// The aspiration text exactly as the learner submitted it.
    pub career_aspiration: String,
    pub recommended_skills: Vec<String>,
    pub recommended_courses: Vec<RecommendedCourse>,
    pub recommended_certifications: Vec<String>,
}

/// Persona assignment from the embedding-based profile flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticProfile {
    pub persona_id: usize,
    pub persona_label: String,
    pub inferred_role: String,
    pub recommendations: Vec<CourseMatch>,
}
