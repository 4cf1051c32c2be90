//! Course retrieval strategies behind the pathway assembler.

use std::sync::Arc;

use tracing::{debug, warn};

use learnpath_core::config::{PathwayConfig, RetrievalStrategy};
use learnpath_core::errors::{CatalogError, PathwayError, PathwayResult};
use learnpath_core::knowledge::DEFAULT_CATALOG_KEY;
use learnpath_core::models::RecommendedCourse;
use learnpath_core::traits::{CourseQuery, ICourseRetriever};
use learnpath_index::CourseIndex;

use crate::catalog::CuratedCatalog;

/// Retrieval over the hand-maintained curated catalog.
pub struct CuratedRetriever {
    catalog: CuratedCatalog,
}

impl CuratedRetriever {
    pub fn new(catalog: CuratedCatalog) -> Self {
        Self { catalog }
    }
}

impl ICourseRetriever for CuratedRetriever {
    fn retrieve(
        &self,
        query: &CourseQuery,
        top_n: usize,
    ) -> PathwayResult<Vec<RecommendedCourse>> {
        // A catalog file may not cover every key the role table can
        // produce. Serve the default key's courses instead of nothing.
        let key = if self.catalog.role(&query.catalog_key).is_some() {
            query.catalog_key.as_str()
        } else if self.catalog.role(DEFAULT_CATALOG_KEY).is_some() {
            warn!(key = %query.catalog_key, "catalog key not covered, serving default key");
            DEFAULT_CATALOG_KEY
        } else {
            return Err(PathwayError::from(CatalogError::UnknownRoleKey {
                key: query.catalog_key.clone(),
            }));
        };

        let picks = self.catalog.pick(key, &query.persona_label, top_n);
        debug!(
            key,
            label = %query.persona_label,
            picked = picks.len(),
            "curated courses selected"
        );
        Ok(picks.into_iter().map(RecommendedCourse::Curated).collect())
    }

    fn name(&self) -> &str {
        "curated-catalog"
    }
}

/// Retrieval by embedding similarity over the course index.
pub struct SemanticRetriever {
    index: Arc<CourseIndex>,
}

impl SemanticRetriever {
    pub fn new(index: Arc<CourseIndex>) -> Self {
        Self { index }
    }
}

impl ICourseRetriever for SemanticRetriever {
    fn retrieve(
        &self,
        query: &CourseQuery,
        top_n: usize,
    ) -> PathwayResult<Vec<RecommendedCourse>> {
        let skills: Vec<&str> = query.skills.iter().map(String::as_str).collect();
        let text = format!("{} {}", query.aspiration, skills.join(", "));
        let hits = self.index.query(&text, top_n)?;
        debug!(hits = hits.len(), "semantic courses selected");
        Ok(hits.into_iter().map(RecommendedCourse::Semantic).collect())
    }

    fn name(&self) -> &str {
        "semantic-index"
    }
}

/// Build the retriever the configuration selects.
///
/// Semantic retrieval needs an ingested index; the caller owns building
/// it, so the strategy is a configuration error when none is supplied.
pub fn create_retriever(
    config: &PathwayConfig,
    index: Option<Arc<CourseIndex>>,
) -> PathwayResult<Box<dyn ICourseRetriever>> {
    match config.strategy {
        RetrievalStrategy::Curated => {
            let catalog = match &config.catalog_path {
                Some(path) => CuratedCatalog::from_json_file(path)?,
                None => CuratedCatalog::builtin(),
            };
            Ok(Box::new(CuratedRetriever::new(catalog)))
        }
        RetrievalStrategy::Semantic => {
            let index = index.ok_or_else(|| {
                PathwayError::ConfigError(
                    "semantic retrieval strategy requires a course index".to_string(),
                )
            })?;
            Ok(Box::new(SemanticRetriever::new(index)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use learnpath_core::config::IndexConfig;
    use learnpath_core::models::CourseRecord;
    use learnpath_index::MockEmbedder;

    fn query(catalog_key: &str, persona_label: &str) -> CourseQuery {
        CourseQuery {
            catalog_key: catalog_key.to_string(),
            persona_label: persona_label.to_string(),
            aspiration: "Data Analyst".to_string(),
            skills: BTreeSet::from(["python".to_string(), "sql".to_string()]),
        }
    }

    fn mock_index_with_courses() -> CourseIndex {
        let config = IndexConfig {
            embedding_dims: 32,
            ..IndexConfig::default()
        };
        let mut index = CourseIndex::new(Box::new(MockEmbedder::new(32, 7)), &config);
        let courses = (0..6)
            .map(|i| CourseRecord {
                id: format!("C-{}", 1000 + i),
                title: format!("Course {i}"),
                sector: "IT-ITeS".to_string(),
                nsqf_level: 4,
                description: "A practice corpus entry.".to_string(),
                skills: "Python, SQL".to_string(),
                duration_hours: 200,
                provider: "National Skill Training Institute - North".to_string(),
            })
            .collect();
        index.ingest(courses).unwrap();
        index
    }

    #[test]
    fn curated_retriever_returns_curated_courses() {
        let retriever = CuratedRetriever::new(CuratedCatalog::builtin());
        let courses = retriever.retrieve(&query("data_analyst", "Intermediate"), 3).unwrap();
        assert_eq!(courses.len(), 3);
        assert!(courses
            .iter()
            .all(|c| matches!(c, RecommendedCourse::Curated(_))));
    }

    #[test]
    fn uncovered_key_falls_back_to_the_default_key() {
        let retriever = CuratedRetriever::new(CuratedCatalog::builtin());
        let courses = retriever.retrieve(&query("cloud_devops", "Beginner"), 3).unwrap();
        let expected = retriever
            .retrieve(&query(DEFAULT_CATALOG_KEY, "Beginner"), 3)
            .unwrap();
        assert_eq!(courses, expected);
    }

    #[test]
    fn catalog_without_default_key_is_an_error() {
        let raw = r#"{
            "machine_learning": {
                "cluster_courses": {},
                "skills": {}
            }
        }"#;
        let catalog: CuratedCatalog = serde_json::from_str(raw).unwrap();
        let retriever = CuratedRetriever::new(catalog);
        let err = retriever.retrieve(&query("cloud_devops", "Beginner"), 3).unwrap_err();
        assert!(err.to_string().contains("cloud_devops"));
    }

    #[test]
    fn semantic_retriever_returns_scored_matches() {
        let retriever = SemanticRetriever::new(Arc::new(mock_index_with_courses()));
        let courses = retriever.retrieve(&query("data_analyst", "Beginner"), 4).unwrap();
        assert_eq!(courses.len(), 4);
        for course in &courses {
            match course {
                RecommendedCourse::Semantic(hit) => {
                    assert!((-1.0..=1.0).contains(&hit.match_score));
                }
                RecommendedCourse::Curated(_) => panic!("expected semantic hits"),
            }
        }
    }

    #[test]
    fn create_retriever_defaults_to_the_builtin_catalog() {
        let retriever = create_retriever(&PathwayConfig::default(), None).unwrap();
        assert_eq!(retriever.name(), "curated-catalog");
    }

    #[test]
    fn semantic_strategy_without_an_index_is_a_config_error() {
        let config = PathwayConfig {
            strategy: RetrievalStrategy::Semantic,
            ..PathwayConfig::default()
        };
        let err = create_retriever(&config, None).unwrap_err();
        assert!(matches!(err, PathwayError::ConfigError(_)));

        let retriever =
            create_retriever(&config, Some(Arc::new(mock_index_with_courses()))).unwrap();
        assert_eq!(retriever.name(), "semantic-index");
    }
}
