//! Shared data models exchanged between pipeline stages.

mod course;
mod degradation_event;
mod feature_vector;
mod pathway;
mod user_profile;

pub use course::{load_courses, CourseMatch, CourseRecord};
pub use degradation_event::DegradationEvent;
pub use feature_vector::FeatureVector;
pub use pathway::{
    CuratedCourse, LearningPathway, PathwayRequest, RecommendedCourse, SemanticProfile,
};
pub use user_profile::UserProfile;
