//! Work-experience extractor: blank-line block splitting over the located
//! experience section, plus per-block keyword and metric scans.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractors::vocab::Vocabulary;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub action_verbs: Vec<String>,
    pub quantifiable_results: Vec<String>,
}

/// Blocks shorter than this are separators or noise, not entries.
const MIN_BLOCK_LEN: usize = 20;

pub struct ExperienceExtractor {
    block_re: Regex,
    bullet_re: Regex,
    percent_re: Regex,
    money_re: Regex,
    scale_re: Regex,
    duration_re: Regex,
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        ExperienceExtractor {
            block_re: Regex::new(r"\n\s*\n").expect("valid regex"),
            bullet_re: Regex::new(r"^[-•*]\s*").expect("valid regex"),
            percent_re: Regex::new(r"\d+%").expect("valid regex"),
            money_re: Regex::new(r"(?i)\$\d+[km]?").expect("valid regex"),
            scale_re: Regex::new(r"(?i)\d+\+?\s*(users|customers|clients|projects)")
                .expect("valid regex"),
            duration_re: Regex::new(r"(?i)((?:19|20)\d{2})\s*[-–—]\s*((?:19|20)\d{2}|present|current)")
                .expect("valid regex"),
        }
    }

    /// One entry per paragraph block of the experience section. `None`
    /// section content yields an empty list.
    pub fn extract(&self, section: Option<&str>, vocab: &Vocabulary) -> Vec<WorkExperienceEntry> {
        let Some(section) = section else {
            return Vec::new();
        };

        self.block_re
            .split(section)
            .filter(|block| block.trim().len() > MIN_BLOCK_LEN)
            .map(|block| self.parse_block(block, vocab))
            .collect()
    }

    fn parse_block(&self, block: &str, vocab: &Vocabulary) -> WorkExperienceEntry {
        let lines: Vec<&str> = block.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let lower = block.to_lowercase();

        let position = lines.first().map(|l| l.to_string());
        // Company: first later line that reads like a proper name, skipping
        // bullets. Often absent when the block is a single title line.
        let company = lines
            .iter()
            .skip(1)
            .find(|l| {
                l.len() < 100
                    && l.chars().any(|c| c.is_ascii_uppercase())
                    && !self.bullet_re.is_match(l)
            })
            .map(|l| l.to_string());

        let (duration, start_date, end_date, current) = self.parse_dates(block);

        WorkExperienceEntry {
            company,
            position,
            location: None,
            duration,
            start_date,
            end_date,
            current,
            description: block.to_string(),
            achievements: self.bullet_lines(&lines),
            technologies: contained_keywords(&lower, &vocab.technologies),
            action_verbs: contained_keywords(&lower, &vocab.block_action_verbs),
            quantifiable_results: self.quantifiable_results(block),
        }
    }

    fn parse_dates(
        &self,
        block: &str,
    ) -> (Option<String>, Option<String>, Option<String>, Option<bool>) {
        match self.duration_re.captures(block) {
            Some(caps) => {
                let start = caps[1].to_string();
                let end = caps[2].to_string();
                let current = end.eq_ignore_ascii_case("present") || end.eq_ignore_ascii_case("current");
                (
                    Some(caps[0].to_string()),
                    Some(start),
                    Some(end),
                    Some(current),
                )
            }
            None => (None, None, None, None),
        }
    }

    pub(crate) fn bullet_lines(&self, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .filter(|l| self.bullet_re.is_match(l))
            .map(|l| self.bullet_re.replace(l, "").to_string())
            .collect()
    }

    pub(crate) fn quantifiable_results(&self, block: &str) -> Vec<String> {
        let mut results = Vec::new();
        for re in [&self.percent_re, &self.money_re, &self.scale_re] {
            results.extend(re.find_iter(block).map(|m| m.as_str().to_string()));
        }
        results
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring scan of `keywords` against lowercase text,
/// preserving the vocabulary's display casing in the output.
pub(crate) fn contained_keywords(lower_text: &str, keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .filter(|k| lower_text.contains(&k.to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &str = "Senior Software Engineer\nAcme Corporation, 2019 - Present\n- Increased throughput by 30%\n- Led migration to Kubernetes serving 2000+ users\n\nSoftware Engineer\nInitech, 2016 - 2019\n- Built reporting pipeline in Python saving $40k annually";

    fn extract(section: &str) -> Vec<WorkExperienceEntry> {
        ExperienceExtractor::new().extract(Some(section), &Vocabulary::default())
    }

    #[test]
    fn test_one_entry_per_block() {
        let entries = extract(SECTION);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_first_line_is_position() {
        let entries = extract(SECTION);
        assert_eq!(entries[0].position.as_deref(), Some("Senior Software Engineer"));
    }

    #[test]
    fn test_company_from_following_line() {
        let entries = extract(SECTION);
        assert_eq!(
            entries[0].company.as_deref(),
            Some("Acme Corporation, 2019 - Present")
        );
    }

    #[test]
    fn test_bullets_become_achievements() {
        let entries = extract(SECTION);
        assert_eq!(entries[0].achievements.len(), 2);
        assert_eq!(entries[0].achievements[0], "Increased throughput by 30%");
    }

    #[test]
    fn test_technologies_scanned_per_block() {
        let entries = extract(SECTION);
        assert!(entries[0].technologies.contains(&"Kubernetes".to_string()));
        assert!(entries[1].technologies.contains(&"Python".to_string()));
        assert!(!entries[1].technologies.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_action_verbs_scanned_per_block() {
        let entries = extract(SECTION);
        assert!(entries[0].action_verbs.contains(&"increased".to_string()));
        assert!(entries[0].action_verbs.contains(&"led".to_string()));
    }

    #[test]
    fn test_quantifiable_results() {
        let entries = extract(SECTION);
        assert!(entries[0].quantifiable_results.contains(&"30%".to_string()));
        assert!(entries[0]
            .quantifiable_results
            .iter()
            .any(|r| r.contains("users")));
        assert!(entries[1].quantifiable_results.contains(&"$40k".to_string()));
    }

    #[test]
    fn test_current_position_detected() {
        let entries = extract(SECTION);
        assert_eq!(entries[0].current, Some(true));
        assert_eq!(entries[0].start_date.as_deref(), Some("2019"));
        assert_eq!(entries[1].current, Some(false));
        assert_eq!(entries[1].end_date.as_deref(), Some("2019"));
    }

    #[test]
    fn test_missing_section_yields_empty() {
        let extractor = ExperienceExtractor::new();
        assert!(extractor.extract(None, &Vocabulary::default()).is_empty());
    }

    #[test]
    fn test_short_blocks_skipped() {
        let entries = extract("Intern\n\nSenior Software Engineer at Acme building platforms");
        assert_eq!(entries.len(), 1);
    }
}
