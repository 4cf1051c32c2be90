//! Substring skill extraction against the canonical vocabulary.

use std::collections::BTreeSet;

use learnpath_core::knowledge::SkillVocabulary;

/// Collect every vocabulary skill appearing as a substring of `text`.
///
/// Matching is case-insensitive and deliberately loose: multi-word
/// entries hit inside longer phrases, and short entries match inside
/// longer words ("java" hits "javascript").
pub fn extract_skills(text: &str, vocab: &SkillVocabulary) -> BTreeSet<String> {
    if text.is_empty() {
        return BTreeSet::new();
    }
    let text_lc = text.to_lowercase();
    vocab
        .iter()
        .filter(|skill| text_lc.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}
