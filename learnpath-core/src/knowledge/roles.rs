use serde::{Deserialize, Serialize};

/// A canonical career role with its market context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    /// Relative labor-market demand in [0, 1].
    pub market_demand: f64,
    /// Skills the role expects, lowercase.
    pub required_skills: Vec<String>,
}

/// Catalog key used when a role has no mapping of its own.
pub const DEFAULT_CATALOG_KEY: &str = "data_analyst";

fn role(name: &str, market_demand: f64, required_skills: &[&str]) -> RoleProfile {
    RoleProfile {
        name: name.to_string(),
        market_demand,
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// The builtin role table.
///
/// Iteration order is significant: the aspiration normalizer's direct
/// substring pass takes the first role whose name appears in the text.
pub(super) fn builtin_roles() -> Vec<RoleProfile> {
    vec![
        role(
            "data analyst",
            0.9,
            &["excel", "sql", "python", "pandas", "tableau"],
        ),
        role(
            "data scientist",
            0.95,
            &["python", "pandas", "numpy", "statistics", "machine learning"],
        ),
        role(
            "machine learning engineer",
            0.95,
            &["python", "tensorflow", "pytorch", "machine learning", "docker"],
        ),
        role(
            "software developer",
            0.85,
            &["git", "java", "c++", "html", "css", "javascript"],
        ),
        role(
            "web developer",
            0.75,
            &["html", "css", "javascript", "react", "node"],
        ),
        role("cyber security", 0.88, &["linux", "networking", "python"]),
        role("ui/ux designer", 0.7, &["ui/ux", "figma", "html", "css"]),
        role(
            "devops engineer",
            0.86,
            &["linux", "docker", "kubernetes", "aws"],
        ),
    ]
}

/// Role name → curated catalog key. Unlisted roles take the default key.
pub(super) fn builtin_catalog_keys() -> Vec<(String, String)> {
    [
        ("data analyst", "data_analyst"),
        ("data scientist", "machine_learning"),
        ("machine learning engineer", "machine_learning"),
        ("software developer", "software_developer"),
        ("web developer", "software_developer"),
    ]
    .iter()
    .map(|(name, key)| (name.to_string(), key.to_string()))
    .collect()
}
