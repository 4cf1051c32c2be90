//! The hand-maintained curated course catalog.
//!
//! A catalog maps role keys (`data_analyst`, `machine_learning`,
//! `software_developer`) to prioritized course lists per persona label,
//! plus per-skill lists used to top up short selections. Both maps keep
//! their declaration order: the skill order in the catalog file is the
//! supplement order, so it is part of the catalog author's contract.

use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use learnpath_core::errors::{CatalogError, PathwayResult};
use learnpath_core::models::CuratedCourse;

/// Course lists for one role key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleCourses {
    /// Persona label ("Beginner" / "Intermediate" / "Advanced") to its
    /// prioritized course list.
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub cluster_courses: Vec<(String, Vec<CuratedCourse>)>,
    /// Skill name to fallback courses, in catalog declaration order.
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub skills: Vec<(String, Vec<CuratedCourse>)>,
}

/// The curated catalog: role key to course lists.
#[derive(Debug, Clone)]
pub struct CuratedCatalog {
    roles: Vec<(String, RoleCourses)>,
}

impl<'de> Deserialize<'de> for CuratedCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self {
            roles: ordered_pairs(deserializer)?,
        })
    }
}

impl CuratedCatalog {
    /// The builtin catalog covering the three role keys.
    pub fn builtin() -> Self {
        fn course(title: &str, platform: &str, url: &str) -> CuratedCourse {
            CuratedCourse {
                title: title.to_string(),
                platform: platform.to_string(),
                url: url.to_string(),
            }
        }

        fn entries(
            pairs: &[(&str, Vec<CuratedCourse>)],
        ) -> Vec<(String, Vec<CuratedCourse>)> {
            pairs
                .iter()
                .map(|(key, courses)| (key.to_string(), courses.clone()))
                .collect()
        }

        let data_analyst = RoleCourses {
            cluster_courses: entries(&[
                (
                    "Beginner",
                    vec![
                        course(
                            "Data Analysis with Python",
                            "Coursera",
                            "https://www.coursera.org/learn/data-analysis-with-python",
                        ),
                        course(
                            "Excel Skills for Business",
                            "Coursera",
                            "https://www.coursera.org/specializations/excel",
                        ),
                    ],
                ),
                (
                    "Intermediate",
                    vec![
                        course(
                            "Google Data Analytics Professional Certificate",
                            "Coursera",
                            "https://www.coursera.org/professional-certificates/google-data-analytics",
                        ),
                        course(
                            "SQL for Data Science",
                            "Coursera",
                            "https://www.coursera.org/learn/sql-for-data-science",
                        ),
                        course(
                            "Data Visualization with Tableau",
                            "Coursera",
                            "https://www.coursera.org/specializations/data-visualization",
                        ),
                    ],
                ),
                (
                    "Advanced",
                    vec![
                        course(
                            "Data Analyst Nanodegree",
                            "Udacity",
                            "https://www.udacity.com/course/data-analyst-nanodegree--nd002",
                        ),
                        course(
                            "Statistics for Data Science",
                            "edX",
                            "https://www.edx.org/learn/statistics",
                        ),
                        course(
                            "Microsoft Power BI Data Analyst",
                            "Microsoft Learn",
                            "https://learn.microsoft.com/credentials/certifications/power-bi-data-analyst-associate/",
                        ),
                    ],
                ),
            ]),
            skills: entries(&[
                (
                    "excel",
                    vec![course(
                        "Excel Basics for Data Analysis",
                        "Coursera",
                        "https://www.coursera.org/learn/excel-basics-data-analysis-ibm",
                    )],
                ),
                (
                    "sql",
                    vec![course(
                        "Intro to SQL: Querying and Managing Data",
                        "Khan Academy",
                        "https://www.khanacademy.org/computing/computer-programming/sql",
                    )],
                ),
                (
                    "statistics",
                    vec![course(
                        "Basic Statistics",
                        "Coursera",
                        "https://www.coursera.org/learn/basic-statistics",
                    )],
                ),
                (
                    "data visualization",
                    vec![course(
                        "Data Visualization Full Course",
                        "YouTube",
                        "https://www.youtube.com/watch?v=MiiANxRHSv4",
                    )],
                ),
            ]),
        };

        let machine_learning = RoleCourses {
            cluster_courses: entries(&[
                (
                    "Beginner",
                    vec![
                        course(
                            "AI For Everyone",
                            "Coursera",
                            "https://www.coursera.org/learn/ai-for-everyone",
                        ),
                        course(
                            "Machine Learning for Everybody",
                            "YouTube",
                            "https://www.youtube.com/watch?v=i_LwzRVP7bg",
                        ),
                    ],
                ),
                (
                    "Intermediate",
                    vec![
                        course(
                            "Machine Learning Specialization",
                            "Coursera",
                            "https://www.coursera.org/specializations/machine-learning-introduction",
                        ),
                        course(
                            "Practical Deep Learning for Coders",
                            "fast.ai",
                            "https://course.fast.ai/",
                        ),
                        course(
                            "Intro to Machine Learning with PyTorch",
                            "Udacity",
                            "https://www.udacity.com/course/intro-to-machine-learning-with-pytorch--ud188",
                        ),
                    ],
                ),
                (
                    "Advanced",
                    vec![
                        course(
                            "Deep Learning Specialization",
                            "Coursera",
                            "https://www.coursera.org/specializations/deep-learning",
                        ),
                        course(
                            "Machine Learning Engineering for Production (MLOps)",
                            "Coursera",
                            "https://www.coursera.org/specializations/machine-learning-engineering-for-production-mlops",
                        ),
                        course(
                            "Natural Language Processing Specialization",
                            "Coursera",
                            "https://www.coursera.org/specializations/natural-language-processing",
                        ),
                    ],
                ),
            ]),
            skills: entries(&[
                (
                    "python",
                    vec![course(
                        "Python for Everybody",
                        "Coursera",
                        "https://www.coursera.org/specializations/python",
                    )],
                ),
                (
                    "statistics",
                    vec![course(
                        "Statistics and Probability",
                        "Khan Academy",
                        "https://www.khanacademy.org/math/statistics-probability",
                    )],
                ),
                (
                    "deep learning",
                    vec![course(
                        "Neural Networks: Zero to Hero",
                        "YouTube",
                        "https://www.youtube.com/playlist?list=PLAqhIrjkxbuWI23v9cThsA9GvCAUhRvKZ",
                    )],
                ),
            ]),
        };

        let software_developer = RoleCourses {
            cluster_courses: entries(&[
                (
                    "Beginner",
                    vec![
                        course(
                            "CS50's Introduction to Computer Science",
                            "edX",
                            "https://cs50.harvard.edu/x/",
                        ),
                        course(
                            "The Odin Project: Foundations",
                            "The Odin Project",
                            "https://www.theodinproject.com/paths/foundations",
                        ),
                    ],
                ),
                (
                    "Intermediate",
                    vec![
                        course(
                            "Full Stack Open",
                            "University of Helsinki",
                            "https://fullstackopen.com/en/",
                        ),
                        course(
                            "JavaScript Algorithms and Data Structures",
                            "freeCodeCamp",
                            "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/",
                        ),
                        course(
                            "Meta Back-End Developer Professional Certificate",
                            "Coursera",
                            "https://www.coursera.org/professional-certificates/meta-back-end-developer",
                        ),
                    ],
                ),
                (
                    "Advanced",
                    vec![
                        course(
                            "Grokking the System Design Interview",
                            "Educative",
                            "https://www.educative.io/courses/grokking-the-system-design-interview",
                        ),
                        course(
                            "Software Architecture & Design of Modern Large Scale Systems",
                            "Udemy",
                            "https://www.udemy.com/course/software-architecture-design-of-modern-large-scale-systems/",
                        ),
                        course(
                            "Data Structures and Algorithms Bootcamp",
                            "Udemy",
                            "https://www.udemy.com/course/data-structures-and-algorithms-bootcamp/",
                        ),
                    ],
                ),
            ]),
            skills: entries(&[
                (
                    "javascript",
                    vec![course(
                        "JavaScript Full Course for Beginners",
                        "YouTube",
                        "https://www.youtube.com/watch?v=PkZNo7MFNFg",
                    )],
                ),
                (
                    "git",
                    vec![course(
                        "Git and GitHub for Beginners",
                        "YouTube",
                        "https://www.youtube.com/watch?v=RGOj5yH7evk",
                    )],
                ),
                (
                    "sql",
                    vec![course(
                        "Databases: Relational Databases and SQL",
                        "edX",
                        "https://www.edx.org/learn/relational-databases",
                    )],
                ),
            ]),
        };

        Self {
            roles: vec![
                ("data_analyst".to_string(), data_analyst),
                ("machine_learning".to_string(), machine_learning),
                ("software_developer".to_string(), software_developer),
            ],
        }
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> PathwayResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CatalogError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = serde_json::from_str(&raw).map_err(|e| CatalogError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(catalog)
    }

    pub fn role(&self, key: &str) -> Option<&RoleCourses> {
        self.roles
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, role)| role)
    }

    pub fn role_keys(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Pick up to `top_n` courses for a role and persona label.
    ///
    /// The persona's prioritized list goes first. A short selection is
    /// topped up from the skill lists in declaration order, skipping
    /// courses already picked. An unknown role key picks nothing.
    pub fn pick(&self, role_key: &str, persona_label: &str, top_n: usize) -> Vec<CuratedCourse> {
        let Some(role) = self.role(role_key) else {
            return Vec::new();
        };

        let mut out: Vec<CuratedCourse> = Vec::new();
        if let Some((_, list)) = role
            .cluster_courses
            .iter()
            .find(|(label, _)| label == persona_label)
        {
            out.extend(list.iter().take(top_n).cloned());
        }

        if out.len() < top_n {
            'skills: for (_, courses) in &role.skills {
                for course in courses {
                    if !out.contains(course) {
                        out.push(course.clone());
                    }
                    if out.len() >= top_n {
                        break 'skills;
                    }
                }
            }
        }

        out.truncate(top_n);
        out
    }
}

/// Deserialize a JSON object into key order preserving pairs.
///
/// `serde_json::Map` iterates alphabetically unless the crate's
/// `preserve_order` feature is on; the supplement order must follow the
/// document, so the pairs are collected directly from the map access.
fn ordered_pairs<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct PairsVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::new();
            while let Some(entry) = map.next_entry()? {
                pairs.push(entry);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor(PhantomData))
}
