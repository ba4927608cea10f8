//! Skill extraction — scans text against the fixed skill vocabulary.

/// The skill vocabulary the screener recognizes. Fixed at process start and
/// never mutated; matched case-insensitively as whole words. Entries are
/// compared literally, so symbol-bearing names like "C++" and "Node.js" need
/// no escaping.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "Go",
    "Rust",
    "SQL",
    "NoSQL",
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Terraform",
    "Git",
    "Linux",
    "CI/CD",
    "REST",
    "GraphQL",
    "Kafka",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Pandas",
    "NumPy",
    "TensorFlow",
    "PyTorch",
    "Agile",
    "Scrum",
];

/// Returns the subset of [`SKILL_VOCABULARY`] present in `text`, in
/// vocabulary order. Presence only — no positions or counts.
pub fn extract_skills(text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|skill| contains_whole_word(&haystack, &skill.to_lowercase()))
        .collect()
}

/// Whole-word containment: `needle` must occur in `haystack` with no
/// alphanumeric character directly on either side, so "java" is found in
/// "java developer" but never inside "javascript". Both inputs must already
/// be lowercased.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, matched)| {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[start + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_no_substring_bleed() {
        let skills = extract_skills("Senior JavaScript developer");
        assert!(skills.contains(&"JavaScript"));
        assert!(!skills.contains(&"Java"));
    }

    #[test]
    fn test_exact_word_still_matches() {
        let skills = extract_skills("Java developer");
        assert!(skills.contains(&"Java"));
        assert!(!skills.contains(&"JavaScript"));
    }

    #[test]
    fn test_case_insensitive() {
        let skills = extract_skills("experienced in PYTHON and docker");
        assert!(skills.contains(&"Python"));
        assert!(skills.contains(&"Docker"));
    }

    #[test]
    fn test_special_characters_match_literally() {
        let skills = extract_skills("Shipped C++ services and Node.js tooling");
        assert!(skills.contains(&"C++"));
        assert!(skills.contains(&"Node.js"));
    }

    #[test]
    fn test_special_characters_respect_boundaries() {
        // "C++11" runs straight into an alphanumeric, so "C++" must not match.
        let skills = extract_skills("AC++ and C++11 are not standalone mentions");
        assert!(!skills.contains(&"C++"));
    }

    #[test]
    fn test_multi_word_terms() {
        let skills = extract_skills("Applied machine learning at scale");
        assert!(skills.contains(&"Machine Learning"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_results_follow_vocabulary_order() {
        let skills = extract_skills("AWS first in text, then Docker, then Python");
        assert_eq!(skills, vec!["Python", "Docker", "AWS"]);
    }

    #[test]
    fn test_no_duplicates_for_repeated_mentions() {
        let skills = extract_skills("Rust Rust Rust");
        assert_eq!(skills, vec!["Rust"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "Python, Docker, Kubernetes and a bit of SQL";
        assert_eq!(extract_skills(text), extract_skills(text));
    }
}
