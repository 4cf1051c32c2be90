use std::collections::BTreeSet;

use crate::errors::PathwayResult;
use crate::models::RecommendedCourse;

/// Inputs a retrieval strategy may consult when choosing courses.
#[derive(Debug, Clone)]
pub struct CourseQuery {
    /// Curated catalog key for the learner's role.
    pub catalog_key: String,
    /// Persona label ("Beginner" / "Intermediate" / "Advanced").
    pub persona_label: String,
    /// The aspiration text exactly as submitted.
    pub aspiration: String,
    /// Skills extracted from the request, lowercase.
    pub skills: BTreeSet<String>,
}

/// Course retrieval strategy behind the pathway assembler.
pub trait ICourseRetriever: Send + Sync {
    /// Retrieve up to `top_n` recommended courses for the query.
    fn retrieve(
        &self,
        query: &CourseQuery,
        top_n: usize,
    ) -> PathwayResult<Vec<RecommendedCourse>>;

    /// Human-readable strategy name.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn ICourseRetriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ICourseRetriever")
            .field("name", &self.name())
            .finish()
    }
}
