/// Canonical lowercase skill names recognized by the extractor.
///
/// Matching is substring-based, so multi-word entries ("machine learning",
/// "power bi") hit inside longer free text.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl SkillVocabulary {
    /// The builtin vocabulary.
    pub fn builtin() -> Self {
        let entries = [
            "python",
            "pandas",
            "numpy",
            "sql",
            "excel",
            "tableau",
            "power bi",
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "data analysis",
            "statistics",
            "probability",
            "linux",
            "git",
            "html",
            "css",
            "javascript",
            "react",
            "node",
            "c++",
            "java",
            "c",
            "docker",
            "kubernetes",
            "nlp",
            "computer vision",
            "aws",
            "azure",
            "gcp",
            "matplotlib",
            "seaborn",
        ];
        Self {
            entries: entries.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a vocabulary from caller-supplied entries, lowercased.
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self {
            entries: entries.into_iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
