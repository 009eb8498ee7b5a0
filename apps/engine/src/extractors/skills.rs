//! Skills extractor: vocabulary intersection by substring containment
//! against the lowercase full text.

use serde::{Deserialize, Serialize};

use crate::extractors::vocab::Vocabulary;
use crate::jitter::RelevanceJitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    Tool,
}

/// A matched skill. `relevance` is a heuristic confidence value inside a
/// per-category band, not a frequency; `occurrences` is the real substring
/// hit count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub relevance: u32,
    pub occurrences: u32,
}

pub struct SkillsExtractor;

impl SkillsExtractor {
    /// Technical hits land in 85–100, soft hits in 70–90. Vocabulary lists
    /// are already unique, so (name, category) dedup holds by construction.
    pub fn extract(
        &self,
        lower_text: &str,
        vocab: &Vocabulary,
        jitter: &mut RelevanceJitter,
    ) -> Vec<Skill> {
        let mut skills = Vec::new();

        for name in &vocab.technical_skills {
            let occurrences = count_occurrences(lower_text, name);
            if occurrences > 0 {
                skills.push(Skill {
                    name: name.clone(),
                    category: SkillCategory::Technical,
                    relevance: jitter.sample(85, 15),
                    occurrences,
                });
            }
        }

        for name in &vocab.soft_skills {
            let occurrences = count_occurrences(lower_text, name);
            if occurrences > 0 {
                skills.push(Skill {
                    name: name.clone(),
                    category: SkillCategory::Soft,
                    relevance: jitter.sample(70, 20),
                    occurrences,
                });
            }
        }

        skills
    }
}

fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    haystack.matches(needle).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Skill> {
        SkillsExtractor.extract(
            &text.to_lowercase(),
            &Vocabulary::default(),
            &mut RelevanceJitter::fixed(),
        )
    }

    #[test]
    fn test_technical_hits_found() {
        let skills = extract("Built services in Python and React");
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"python"));
        assert!(names.contains(&"react"));
    }

    #[test]
    fn test_soft_hits_categorized() {
        let skills = extract("Known for leadership and communication");
        assert!(skills
            .iter()
            .any(|s| s.name == "leadership" && s.category == SkillCategory::Soft));
    }

    #[test]
    fn test_relevance_bands() {
        let skills = extract("Python, leadership");
        for skill in &skills {
            match skill.category {
                SkillCategory::Technical => assert!((85..100).contains(&skill.relevance)),
                SkillCategory::Soft => assert!((70..90).contains(&skill.relevance)),
                _ => {}
            }
        }
    }

    #[test]
    fn test_occurrences_count_real_hits() {
        let skills = extract("Python services call Python jobs over Python queues");
        let python = skills.iter().find(|s| s.name == "python").unwrap();
        assert_eq!(python.occurrences, 3);
    }

    #[test]
    fn test_insertion_order_follows_vocabulary() {
        // "javascript" precedes "python" in the vocabulary, so it must come
        // first regardless of position in the text.
        let skills = extract("python then javascript");
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        let js = names.iter().position(|n| *n == "javascript").unwrap();
        let py = names.iter().position(|n| *n == "python").unwrap();
        assert!(js < py);
    }

    #[test]
    fn test_no_hits_yields_empty() {
        // Note: fixture avoids short vocab substrings like "ai" and "git".
        assert!(extract("fond of woodwork and hiking").is_empty());
    }

    #[test]
    fn test_fixed_jitter_is_reproducible() {
        let a = extract("Python and leadership");
        let b = extract("Python and leadership");
        let rel_a: Vec<u32> = a.iter().map(|s| s.relevance).collect();
        let rel_b: Vec<u32> = b.iter().map(|s| s.relevance).collect();
        assert_eq!(rel_a, rel_b);
    }
}
