//! The pathway engine: persona lookup, retrieval, response envelopes.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use learnpath_core::config::{LearnPathConfig, PathwayConfig, PersonaConfig};
use learnpath_core::errors::{PathwayResult, PersonaError};
use learnpath_core::knowledge::{persona_theme, KnowledgeBase};
use learnpath_core::models::{
    CourseRecord, DegradationEvent, LearningPathway, PathwayRequest, SemanticProfile, UserProfile,
};
use learnpath_core::traits::{CourseQuery, ICourseRetriever};
use learnpath_features::FeatureBuilder;
use learnpath_index::CourseIndex;
use learnpath_persona::{bootstrap, PersonaModel};

use crate::retrieval::create_retriever;

/// Clusters in the embedding-space persona model, one per theme label.
const SEMANTIC_CLUSTERS: usize = 5;

/// Samples synthesized when bootstrapping the embedding-space model.
const SEMANTIC_BOOTSTRAP_SAMPLES: usize = 200;

/// Resources backing the embedding-space profile flow.
struct SemanticResources {
    index: Arc<CourseIndex>,
    persona: PersonaModel,
}

/// Drives both recommendation flows end to end.
///
/// The behavioral flow builds a feature vector, assigns a persona
/// cluster, and retrieves courses through the configured strategy. The
/// semantic flow clusters the aspiration's embedding and ranks the
/// course corpus directly; it is available only when the engine was
/// assembled with an index.
pub struct PathwayEngine {
    knowledge: KnowledgeBase,
    persona: PersonaModel,
    retriever: Box<dyn ICourseRetriever>,
    config: PathwayConfig,
    semantic: Option<SemanticResources>,
    degradations: Vec<DegradationEvent>,
}

impl PathwayEngine {
    pub fn new(
        knowledge: KnowledgeBase,
        persona: PersonaModel,
        retriever: Box<dyn ICourseRetriever>,
        config: PathwayConfig,
    ) -> Self {
        Self {
            knowledge,
            persona,
            retriever,
            config,
            semantic: None,
            degradations: Vec::new(),
        }
    }

    /// Attach the embedding-space profile flow.
    pub fn with_semantic(mut self, index: Arc<CourseIndex>, persona: PersonaModel) -> Self {
        self.semantic = Some(SemanticResources { index, persona });
        self
    }

    /// Assemble an engine from configuration.
    ///
    /// The behavioral persona model loads or trains under the configured
    /// model directory. When a corpus is supplied, a course index is
    /// built over it and the semantic flows are enabled; the
    /// embedding-space persona model persists under the `semantic`
    /// subdirectory so the two models never clobber each other.
    pub fn from_config(
        config: &LearnPathConfig,
        corpus: Option<Vec<CourseRecord>>,
    ) -> PathwayResult<Self> {
        let knowledge = KnowledgeBase::builtin();
        let persona = PersonaModel::load_or_train(&config.persona)?;

        let mut degradations = Vec::new();
        let index = match corpus {
            Some(courses) => {
                let mut index = CourseIndex::from_config(&config.index);
                index.ingest(courses)?;
                degradations.extend(index.drain_degradation_events());
                Some(Arc::new(index))
            }
            None => None,
        };

        let retriever = create_retriever(&config.pathway, index.clone())?;
        let mut engine = Self::new(knowledge, persona, retriever, config.pathway.clone());
        engine.degradations = degradations;

        if let Some(index) = index {
            let semantic_config = PersonaConfig {
                model_dir: config.persona.model_dir.join("semantic"),
                clusters: SEMANTIC_CLUSTERS,
                bootstrap_samples: SEMANTIC_BOOTSTRAP_SAMPLES,
                ..config.persona.clone()
            };
            let samples = bootstrap::embedding_dataset(
                semantic_config.bootstrap_samples,
                config.index.embedding_dims,
                semantic_config.random_seed,
            );
            let embedding_persona = PersonaModel::load_or_train_on(&semantic_config, &samples)?;
            engine = engine.with_semantic(index, embedding_persona);
        }

        Ok(engine)
    }

    /// Whether the semantic profile flow is available.
    pub fn semantic_enabled(&self) -> bool {
        self.semantic.is_some()
    }

    /// Degradation events recorded while assembling the engine.
    pub fn degradation_events(&self) -> &[DegradationEvent] {
        &self.degradations
    }

    /// Assemble a learning pathway for one learner request.
    pub fn generate_learning_pathway(
        &self,
        profile: &UserProfile,
        current_skills: &[String],
        aspiration: &str,
    ) -> PathwayResult<LearningPathway> {
        let features =
            FeatureBuilder::new(&self.knowledge).build(profile, current_skills, aspiration);
        let cluster_id = self.persona.predict(&features.as_array())?;
        let roadmap = self.knowledge.roadmaps().get(cluster_id);
        let catalog_key = self.knowledge.catalog_key(&features.role);

        let query = CourseQuery {
            catalog_key: catalog_key.to_string(),
            persona_label: roadmap.label.clone(),
            aspiration: aspiration.to_string(),
            skills: features.extracted_skills.clone(),
        };
        let recommended_courses = self.retriever.retrieve(&query, self.config.top_courses)?;

        info!(
            cluster = cluster_id,
            label = %roadmap.label,
            role = %features.role,
            retriever = self.retriever.name(),
            courses = recommended_courses.len(),
            "learning pathway assembled"
        );

        Ok(LearningPathway {
            cluster_id,
            cluster_label: roadmap.label.clone(),
            career_aspiration: aspiration.to_string(),
            recommended_skills: roadmap.skills.clone(),
            recommended_courses,
            recommended_certifications: roadmap.certifications.clone(),
        })
    }

    /// Profile one learner in embedding space and rank the corpus.
    pub fn semantic_profile(
        &self,
        profile: &UserProfile,
        skills: &[String],
        aspiration: &str,
    ) -> PathwayResult<SemanticProfile> {
        let Some(semantic) = self.semantic.as_ref() else {
            return Err(PersonaError::NotTrained {
                reason: "engine assembled without a course index".to_string(),
            }
            .into());
        };

        let features = FeatureBuilder::new(&self.knowledge).build(profile, skills, aspiration);

        // The persona lives in embedding space: cluster the aspiration's
        // vector, not the behavioral features.
        let embedding = semantic.index.embed_text(aspiration)?;
        let row: Vec<f64> = embedding.iter().map(|v| f64::from(*v)).collect();
        let persona_id = semantic.persona.predict(&row)?;
        let persona_label = persona_theme(persona_id).to_string();

        let text = format!("{} {}", aspiration, skills.join(", "));
        let recommendations = semantic.index.query(&text, self.config.top_matches)?;

        let inferred_role = if features.role.is_empty() {
            "General Learner".to_string()
        } else {
            features.role.clone()
        };

        info!(
            persona = persona_id,
            label = %persona_label,
            role = %inferred_role,
            matches = recommendations.len(),
            "semantic profile assembled"
        );

        Ok(SemanticProfile {
            persona_id,
            persona_label,
            inferred_role,
            recommendations,
        })
    }

    /// Serve one pathway request, never propagating an error.
    ///
    /// Success is the serialized pathway itself; any failure collapses
    /// into a `{"status": "error"}` envelope so the boundary always has
    /// a JSON answer to hand back.
    pub fn handle_request(&self, request: &PathwayRequest) -> serde_json::Value {
        let result = self.generate_learning_pathway(
            &request.user_profile,
            &request.current_skills,
            &request.career_aspiration,
        );
        match result {
            Ok(pathway) => match serde_json::to_value(&pathway) {
                Ok(value) => value,
                Err(e) => error_envelope(&e.to_string()),
            },
            Err(e) => {
                error!(error = %e, "pathway generation failed");
                error_envelope(&e.to_string())
            }
        }
    }

    /// Serve one semantic profile request, never propagating an error.
    pub fn handle_profile_request(&self, request: &PathwayRequest) -> serde_json::Value {
        let result = self.semantic_profile(
            &request.user_profile,
            &request.current_skills,
            &request.career_aspiration,
        );
        match result {
            Ok(profile) => match serde_json::to_value(&profile.recommendations) {
                Ok(recommendations) => json!({
                    "status": "success",
                    "profile": {
                        "persona_id": profile.persona_id,
                        "persona_label": profile.persona_label,
                        "inferred_role": profile.inferred_role,
                    },
                    "recommendations": recommendations,
                }),
                Err(e) => error_envelope(&e.to_string()),
            },
            Err(e) => {
                error!(error = %e, "semantic profile failed");
                error_envelope(&e.to_string())
            }
        }
    }
}

fn error_envelope(message: &str) -> serde_json::Value {
    json!({ "status": "error", "message": message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use serde_json::json;

    use crate::catalog::CuratedCatalog;
    use crate::retrieval::CuratedRetriever;

    fn config(dir: &Path) -> LearnPathConfig {
        let mut config = LearnPathConfig::default();
        config.persona.model_dir = dir.join("models");
        config.persona.bootstrap_samples = 120;
        config.index.embedding_dims = 48;
        config
    }

    fn request() -> PathwayRequest {
        serde_json::from_value(json!({
            "user_profile": {"avg_score": 0.55, "experience_years": 1},
            "current_skills": ["python", "excel"],
            "career_aspiration": "Data Analyst"
        }))
        .unwrap()
    }

    #[test]
    fn pathway_carries_roadmap_and_courses() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PathwayEngine::from_config(&config(dir.path()), None).unwrap();
        let request = request();

        let pathway = engine
            .generate_learning_pathway(
                &request.user_profile,
                &request.current_skills,
                &request.career_aspiration,
            )
            .unwrap();

        assert!(["Beginner", "Intermediate", "Advanced"]
            .contains(&pathway.cluster_label.as_str()));
        assert_eq!(pathway.career_aspiration, "Data Analyst");
        assert_eq!(pathway.recommended_skills.len(), 3);
        assert_eq!(pathway.recommended_courses.len(), 3);
        assert!(!pathway.recommended_certifications.is_empty());
    }

    #[test]
    fn unknown_aspiration_still_yields_a_pathway() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PathwayEngine::from_config(&config(dir.path()), None).unwrap();

        let pathway = engine
            .generate_learning_pathway(&UserProfile::default(), &[], "astronaut")
            .unwrap();

        // Unrecognized roles fall back to the default catalog key.
        assert_eq!(pathway.recommended_courses.len(), 3);
    }

    #[test]
    fn handle_request_serializes_the_pathway_unwrapped() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PathwayEngine::from_config(&config(dir.path()), None).unwrap();

        let value = engine.handle_request(&request());
        assert!(value.get("status").is_none());
        assert!(value.get("cluster_id").is_some());
        assert_eq!(value["recommended_courses"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn handle_request_collapses_errors_into_the_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        // A catalog that covers neither the mapped key nor the default
        // key forces a retrieval error.
        let raw = r#"{"machine_learning": {"cluster_courses": {}, "skills": {}}}"#;
        let catalog: CuratedCatalog = serde_json::from_str(raw).unwrap();
        let engine = PathwayEngine::new(
            KnowledgeBase::builtin(),
            PersonaModel::load_or_train(&config.persona).unwrap(),
            Box::new(CuratedRetriever::new(catalog)),
            config.pathway.clone(),
        );

        let value = engine.handle_request(&PathwayRequest {
            career_aspiration: "astronaut".to_string(),
            ..PathwayRequest::default()
        });
        assert_eq!(value["status"], "error");
        assert!(!value["message"].as_str().unwrap().is_empty());
    }

    #[test]
    fn semantic_profile_requires_an_index() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PathwayEngine::from_config(&config(dir.path()), None).unwrap();
        assert!(!engine.semantic_enabled());

        let err = engine
            .semantic_profile(&UserProfile::default(), &[], "Data Analyst")
            .unwrap_err();
        assert!(err.to_string().contains("not trained"));
    }

    #[test]
    fn semantic_engine_profiles_and_recommends() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = test_fixtures::course_corpus(30, 42);
        let engine =
            PathwayEngine::from_config(&config(dir.path()), Some(corpus)).unwrap();
        assert!(engine.semantic_enabled());

        let request = request();
        let profile = engine
            .semantic_profile(
                &request.user_profile,
                &request.current_skills,
                &request.career_aspiration,
            )
            .unwrap();

        assert!(profile.persona_id < SEMANTIC_CLUSTERS);
        assert_eq!(profile.persona_label, persona_theme(profile.persona_id));
        assert_eq!(profile.inferred_role, "data analyst");
        assert_eq!(profile.recommendations.len(), 5);
        for hit in &profile.recommendations {
            assert!((-1.0..=1.0).contains(&hit.match_score));
        }
    }

    #[test]
    fn empty_aspiration_infers_the_general_learner() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = test_fixtures::course_corpus(10, 42);
        let engine =
            PathwayEngine::from_config(&config(dir.path()), Some(corpus)).unwrap();

        let profile = engine
            .semantic_profile(&UserProfile::default(), &[], "")
            .unwrap();
        assert_eq!(profile.inferred_role, "General Learner");
    }

    #[test]
    fn profile_request_envelopes_success_and_error() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = test_fixtures::course_corpus(30, 42);
        let semantic_engine =
            PathwayEngine::from_config(&config(dir.path()), Some(corpus)).unwrap();

        let value = semantic_engine.handle_profile_request(&request());
        assert_eq!(value["status"], "success");
        assert!(value["profile"]["persona_label"].as_str().is_some());
        assert_eq!(value["profile"]["inferred_role"], "data analyst");
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 5);

        let bare_dir = tempfile::tempdir().unwrap();
        let bare_engine =
            PathwayEngine::from_config(&config(bare_dir.path()), None).unwrap();
        let value = bare_engine.handle_profile_request(&request());
        assert_eq!(value["status"], "error");
    }
}
