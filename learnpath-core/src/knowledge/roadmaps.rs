use serde::{Deserialize, Serialize};

/// Static roadmap content attached to one persona cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaRoadmap {
    pub label: String,
    pub skills: Vec<String>,
    pub courses: Vec<String>,
    pub certifications: Vec<String>,
}

/// Cluster id → roadmap, with entry 0 as the fallback for ids the table
/// does not cover.
#[derive(Debug, Clone)]
pub struct RoadmapTable {
    entries: Vec<PersonaRoadmap>,
}

impl RoadmapTable {
    /// The builtin three-stage roadmap table.
    pub fn builtin() -> Self {
        fn roadmap(
            label: &str,
            skills: &[&str],
            courses: &[&str],
            certifications: &[&str],
        ) -> PersonaRoadmap {
            PersonaRoadmap {
                label: label.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
                courses: courses.iter().map(|s| s.to_string()).collect(),
                certifications: certifications.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self {
            entries: vec![
                roadmap(
                    "Beginner",
                    &[
                        "Fundamental concepts of chosen domain",
                        "Basic programming / tools",
                        "Introductory projects",
                    ],
                    &["YouTube basics playlist", "Beginner Coursera specialization"],
                    &["Foundational certification in chosen field"],
                ),
                roadmap(
                    "Intermediate",
                    &[
                        "Advanced tools & real datasets",
                        "Intermediate problem-solving",
                        "Portfolio-building projects",
                    ],
                    &[
                        "Coursera intermediate course",
                        "Udemy hands-on projects course",
                    ],
                    &["Google / Meta career cert"],
                ),
                roadmap(
                    "Advanced",
                    &[
                        "Industry-level skills",
                        "Real-world capstone projects",
                        "Interview preparation",
                    ],
                    &["Specialized Coursera program", "Advanced Udemy bootcamp"],
                    &["Professional certification"],
                ),
            ],
        }
    }

    /// Roadmap for a cluster id, falling back to the first entry.
    pub fn get(&self, cluster_id: usize) -> &PersonaRoadmap {
        self.entries.get(cluster_id).unwrap_or(&self.entries[0])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Heuristic theme label for the embedding-based persona clusters.
pub fn persona_theme(cluster_id: usize) -> &'static str {
    match cluster_id {
        0 => "Tech Savvy / Data Science Aspirants",
        1 => "Vocational / Trades & Technician",
        2 => "Creative / Design",
        3 => "Business / Management",
        4 => "Entry Level / General Skilling",
        _ => "General Learner Group",
    }
}
