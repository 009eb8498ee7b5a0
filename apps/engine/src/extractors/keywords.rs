//! Keyword frequency analysis plus the industry/role/seniority detectors.
//!
//! Everything here is substring matching against lowercase text with a
//! single fallback value when nothing matches, so output is never empty.

use serde::{Deserialize, Serialize};

use crate::extractors::skills::Skill;
use crate::extractors::vocab::Vocabulary;

/// Only the top N skills feed the keyword report.
const TOP_KEYWORDS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u32,
    pub relevance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbCount {
    pub verb: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub technical: Vec<KeywordCount>,
    pub action: Vec<VerbCount>,
    pub power_words: Vec<WordCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryAnalysis {
    pub detected_industry: Vec<String>,
    pub detected_role: Vec<String>,
    pub seniority_level: String,
    pub career_stage: String,
}

/// Top-10 skill keywords with real counts, plus per-verb and power-word
/// frequencies (substring counts, matching the legacy report).
pub fn analyze_keywords(lower_text: &str, skills: &[Skill], vocab: &Vocabulary) -> KeywordAnalysis {
    let technical = skills
        .iter()
        .take(TOP_KEYWORDS)
        .map(|s| KeywordCount {
            keyword: s.name.clone(),
            count: s.occurrences,
            relevance: s.relevance,
        })
        .collect();

    let action = vocab
        .block_action_verbs
        .iter()
        .map(|verb| VerbCount {
            verb: verb.clone(),
            count: lower_text.matches(verb.as_str()).count() as u32,
        })
        .filter(|v| v.count > 0)
        .collect();

    let power_words = vocab
        .power_words
        .iter()
        .map(|word| WordCount {
            word: word.clone(),
            count: lower_text.matches(word.as_str()).count() as u32,
        })
        .filter(|w| w.count > 0)
        .collect();

    KeywordAnalysis {
        technical,
        action,
        power_words,
    }
}

pub fn detect_industries(lower_text: &str, vocab: &Vocabulary) -> Vec<String> {
    detect_with_fallback(lower_text, &vocab.industries, "Technology")
}

pub fn detect_roles(lower_text: &str, vocab: &Vocabulary) -> Vec<String> {
    detect_with_fallback(lower_text, &vocab.roles, "Professional")
}

pub fn detect_seniority(lower_text: &str) -> String {
    if lower_text.contains("senior") || lower_text.contains("lead") || lower_text.contains("principal")
    {
        "Senior".to_string()
    } else if lower_text.contains("junior") || lower_text.contains("entry") {
        "Junior".to_string()
    } else {
        "Mid-level".to_string()
    }
}

/// Crude proxy: longer resumes read as further-along careers.
pub fn detect_career_stage(total_words: u32) -> String {
    if total_words > 800 {
        "Experienced".to_string()
    } else if total_words > 400 {
        "Mid-Career".to_string()
    } else {
        "Entry-Level".to_string()
    }
}

fn detect_with_fallback(lower_text: &str, candidates: &[String], fallback: &str) -> Vec<String> {
    let detected: Vec<String> = candidates
        .iter()
        .filter(|c| lower_text.contains(&c.to_lowercase()))
        .cloned()
        .collect();

    if detected.is_empty() {
        vec![fallback.to_string()]
    } else {
        detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::skills::SkillsExtractor;
    use crate::jitter::RelevanceJitter;

    #[test]
    fn test_industry_detection_and_fallback() {
        let vocab = Vocabulary::default();
        assert_eq!(
            detect_industries("worked in healthcare and finance", &vocab),
            vec!["Finance", "Healthcare"]
        );
        assert_eq!(detect_industries("no match here", &vocab), vec!["Technology"]);
    }

    #[test]
    fn test_role_detection_and_fallback() {
        let vocab = Vocabulary::default();
        assert_eq!(
            detect_roles("senior backend engineer", &vocab),
            vec!["Engineer"]
        );
        assert_eq!(detect_roles("worked on things", &vocab), vec!["Professional"]);
    }

    #[test]
    fn test_seniority_tiers() {
        assert_eq!(detect_seniority("principal architect"), "Senior");
        assert_eq!(detect_seniority("entry position"), "Junior");
        assert_eq!(detect_seniority("software person"), "Mid-level");
    }

    #[test]
    fn test_career_stage_by_word_count() {
        assert_eq!(detect_career_stage(900), "Experienced");
        assert_eq!(detect_career_stage(500), "Mid-Career");
        assert_eq!(detect_career_stage(100), "Entry-Level");
    }

    #[test]
    fn test_keyword_analysis_takes_top_ten_skills() {
        let vocab = Vocabulary::default();
        let text = "javascript typescript python java ruby php swift kotlin react angular vue"
            .to_string();
        let skills = SkillsExtractor.extract(&text, &vocab, &mut RelevanceJitter::fixed());
        assert!(skills.len() > TOP_KEYWORDS);
        let analysis = analyze_keywords(&text, &skills, &vocab);
        assert_eq!(analysis.technical.len(), TOP_KEYWORDS);
    }

    #[test]
    fn test_action_and_power_words_require_hits() {
        let vocab = Vocabulary::default();
        let analysis = analyze_keywords("developed and led the rollout", &[], &vocab);
        assert!(analysis.action.iter().any(|v| v.verb == "developed"));
        assert!(analysis.power_words.iter().any(|w| w.word == "led"));
        assert!(analysis.action.iter().all(|v| v.count > 0));
    }
}
