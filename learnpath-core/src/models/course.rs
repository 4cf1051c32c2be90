use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, PathwayResult};

/// One course in the searchable corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub sector: String,
    pub nsqf_level: u8,
    pub description: String,
    /// Comma-joined skill names, as the corpus stores them.
    pub skills: String,
    pub duration_hours: u32,
    pub provider: String,
}

impl CourseRecord {
    /// The text the index embeds for this course.
    pub fn embedding_text(&self) -> String {
        format!(
            "Title: {}. Description: {}. Skills: {}",
            self.title, self.description, self.skills
        )
    }
}

/// A course hit from the semantic index with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMatch {
    #[serde(flatten)]
    pub course: CourseRecord,
    pub match_score: f64,
}

/// Load a course corpus from a JSON array file.
pub fn load_courses(path: &Path) -> PathwayResult<Vec<CourseRecord>> {
    let raw = fs::read_to_string(path).map_err(|e| CatalogError::CorpusUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let courses = serde_json::from_str(&raw).map_err(|e| CatalogError::CorpusUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CourseRecord {
        CourseRecord {
            id: "C-1000".into(),
            title: "Python Specialist - NSQF Level 4".into(),
            sector: "IT-ITeS".into(),
            nsqf_level: 4,
            description: "A comprehensive 200-hour course covering Python.".into(),
            skills: "Python, IT-ITeS, Safety, Teamwork".into(),
            duration_hours: 200,
            provider: "National Skill Training Institute - North".into(),
        }
    }

    #[test]
    fn embedding_text_includes_title_description_skills() {
        let text = sample().embedding_text();
        assert!(text.starts_with("Title: Python Specialist"));
        assert!(text.contains("Description: A comprehensive"));
        assert!(text.contains("Skills: Python, IT-ITeS"));
    }

    #[test]
    fn course_match_serializes_flat() {
        let hit = CourseMatch {
            course: sample(),
            match_score: 0.842,
        };
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["id"], "C-1000");
        assert_eq!(value["match_score"], 0.842);
        assert!(value.get("course").is_none());
    }

    #[test]
    fn missing_corpus_file_is_a_catalog_error() {
        let err = load_courses(Path::new("/nonexistent/courses.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/courses.json"));
    }
}
