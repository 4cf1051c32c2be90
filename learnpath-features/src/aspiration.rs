//! Free-text career aspiration → canonical role name.

use learnpath_core::knowledge::KnowledgeBase;

/// Normalize an aspiration to a canonical role, or empty when unknown.
///
/// Pass 1 returns the first role whose name appears verbatim in the
/// lowercased text, in table order. Pass 2 applies synonym rules in
/// declared order; the first matching rule wins.
pub fn normalize_aspiration(aspiration: &str, knowledge: &KnowledgeBase) -> String {
    if aspiration.is_empty() {
        return String::new();
    }
    let a = aspiration.to_lowercase();

    for role in knowledge.roles() {
        if a.contains(role.name.as_str()) {
            return role.name.clone();
        }
    }

    if a.contains("data scientist") || a.contains("ml engineer") || a.contains("machine learning")
    {
        return if a.contains("engineer") || a.contains("developer") {
            "machine learning engineer".to_string()
        } else {
            "data scientist".to_string()
        };
    }
    if a.contains("data") && a.contains("analyst") {
        return "data analyst".to_string();
    }
    if a.contains("frontend") || a.contains("react") || a.contains("ui") || a.contains("ux") {
        return "ui/ux designer".to_string();
    }
    if a.contains("devops") || a.contains("k8s") || a.contains("kubernetes") {
        return "devops engineer".to_string();
    }
    if a.contains("web") && a.contains("developer") {
        return "web developer".to_string();
    }
    if a.contains("software") || a.contains("developer") {
        return "software developer".to_string();
    }

    String::new()
}
