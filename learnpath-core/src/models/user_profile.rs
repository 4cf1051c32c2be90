use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loosely structured learner profile as received at the boundary.
///
/// Upstream clients send whatever they have: numeric fields may arrive as
/// numbers, numeric strings, or garbage, and `projects` may be free text
/// or a list. Accessors coerce instead of failing; the feature builder
/// supplies defaults for anything that does not coerce.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub avg_score: Option<Value>,
    pub experience_years: Option<Value>,
    pub bio: Option<String>,
    pub projects: Option<Value>,
}

impl UserProfile {
    /// `avg_score` as a float, when it is a number or numeric string.
    pub fn avg_score_f64(&self) -> Option<f64> {
        coerce_f64(self.avg_score.as_ref())
    }

    /// `experience_years` as a float, when coercible.
    pub fn experience_years_f64(&self) -> Option<f64> {
        coerce_f64(self.experience_years.as_ref())
    }

    /// All free text carried by `projects`, whether it arrived as a
    /// string or a list. List entries that are not strings are rendered
    /// through their JSON form.
    pub fn projects_text(&self) -> String {
        match self.projects.as_ref() {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" "),
            _ => String::new(),
        }
    }
}

fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    // NaN would poison every downstream clamp.
    parsed.filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_string_coerces() {
        let profile: UserProfile =
            serde_json::from_value(json!({"avg_score": "0.7"})).unwrap();
        assert_eq!(profile.avg_score_f64(), Some(0.7));
    }

    #[test]
    fn garbage_numeric_coerces_to_none() {
        let profile: UserProfile =
            serde_json::from_value(json!({"avg_score": "high", "experience_years": [1]}))
                .unwrap();
        assert_eq!(profile.avg_score_f64(), None);
        assert_eq!(profile.experience_years_f64(), None);
    }

    #[test]
    fn projects_list_flattens_to_text() {
        let profile: UserProfile = serde_json::from_value(json!({
            "projects": ["built a dashboard in tableau", "sql reporting"]
        }))
        .unwrap();
        let text = profile.projects_text();
        assert!(text.contains("tableau"));
        assert!(text.contains("sql"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let profile: UserProfile = serde_json::from_value(json!({
            "avg_score": 0.9,
            "favourite_colour": "green"
        }))
        .unwrap();
        assert_eq!(profile.avg_score_f64(), Some(0.9));
    }
}
