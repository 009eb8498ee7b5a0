//! Education extractor: blank-line block splitting over the located
//! education section.

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub gpa: Option<String>,
    pub achievements: Vec<String>,
}

/// Education blocks can legitimately be one short line ("BS, MIT, 2015"),
/// so the noise floor sits lower than for experience.
const MIN_BLOCK_LEN: usize = 10;

pub struct EducationExtractor {
    block_re: Regex,
    bullet_re: Regex,
    institution_re: Regex,
    degree_re: Regex,
    gpa_re: Regex,
    field_re: Regex,
}

impl EducationExtractor {
    pub fn new() -> Self {
        EducationExtractor {
            block_re: Regex::new(r"\n\s*\n").expect("valid regex"),
            bullet_re: Regex::new(r"^[-•*]\s*").expect("valid regex"),
            institution_re: Regex::new(r"(?i)university|college|institute|school")
                .expect("valid regex"),
            degree_re: Regex::new(r"(?i)bachelor|master|phd|associate|diploma|b\.s|m\.s|b\.a|m\.a")
                .expect("valid regex"),
            gpa_re: Regex::new(r"(?i)GPA:?\s*(\d\.\d+)").expect("valid regex"),
            field_re: Regex::new(r"(?i)(?:bachelor|master|phd|associate|diploma)[^,\n]*?\s+in\s+([^,\n]+)")
                .expect("valid regex"),
        }
    }

    pub fn extract(&self, section: Option<&str>) -> Vec<EducationEntry> {
        let Some(section) = section else {
            return Vec::new();
        };

        self.block_re
            .split(section)
            .filter(|block| block.trim().len() > MIN_BLOCK_LEN)
            .map(|block| self.parse_block(block))
            .collect()
    }

    fn parse_block(&self, block: &str) -> EducationEntry {
        let lines: Vec<&str> = block.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

        EducationEntry {
            institution: lines
                .iter()
                .find(|l| self.institution_re.is_match(l))
                .map(|l| l.to_string()),
            degree: lines
                .iter()
                .find(|l| self.degree_re.is_match(l))
                .map(|l| l.to_string()),
            field_of_study: self
                .field_re
                .captures(block)
                .map(|c| c[1].trim().to_string()),
            gpa: self.gpa_re.captures(block).map(|c| c[1].to_string()),
            achievements: lines
                .iter()
                .filter(|l| self.bullet_re.is_match(l))
                .map(|l| self.bullet_re.replace(l, "").to_string())
                .collect(),
        }
    }
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &str = "Bachelor of Science in Computer Science\nState University, GPA: 3.85\n- Dean's List, 2018\n\nMaster of Engineering\nTech Institute";

    fn extract(section: &str) -> Vec<EducationEntry> {
        EducationExtractor::new().extract(Some(section))
    }

    #[test]
    fn test_one_entry_per_block() {
        assert_eq!(extract(SECTION).len(), 2);
    }

    #[test]
    fn test_institution_by_keyword_line() {
        let entries = extract(SECTION);
        assert_eq!(
            entries[0].institution.as_deref(),
            Some("State University, GPA: 3.85")
        );
        assert_eq!(entries[1].institution.as_deref(), Some("Tech Institute"));
    }

    #[test]
    fn test_degree_by_keyword_line() {
        let entries = extract(SECTION);
        assert_eq!(
            entries[0].degree.as_deref(),
            Some("Bachelor of Science in Computer Science")
        );
    }

    #[test]
    fn test_field_of_study_after_in() {
        let entries = extract(SECTION);
        assert_eq!(entries[0].field_of_study.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_gpa_captured() {
        let entries = extract(SECTION);
        assert_eq!(entries[0].gpa.as_deref(), Some("3.85"));
        assert!(entries[1].gpa.is_none());
    }

    #[test]
    fn test_bullets_become_achievements() {
        let entries = extract(SECTION);
        assert_eq!(entries[0].achievements, vec!["Dean's List, 2018"]);
    }

    #[test]
    fn test_missing_section_yields_empty() {
        assert!(EducationExtractor::new().extract(None).is_empty());
    }
}
