//! Project, certification, and award extractors. Projects use the same
//! paragraph-block granularity as experience; certifications and awards are
//! one entry per non-trivial line.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractors::experience::contained_keywords;
use crate::extractors::vocab::Vocabulary;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub title: String,
}

const MIN_BLOCK_LEN: usize = 20;
const MIN_LINE_LEN: usize = 5;

pub struct ProjectExtractor {
    block_re: Regex,
    bullet_re: Regex,
    issuer_re: Regex,
}

impl ProjectExtractor {
    pub fn new() -> Self {
        ProjectExtractor {
            block_re: Regex::new(r"\n\s*\n").expect("valid regex"),
            bullet_re: Regex::new(r"^[-•*]\s*").expect("valid regex"),
            issuer_re: Regex::new(r"-\s*([^|\n]+)").expect("valid regex"),
        }
    }

    pub fn extract_projects(&self, section: Option<&str>, vocab: &Vocabulary) -> Vec<Project> {
        let Some(section) = section else {
            return Vec::new();
        };

        self.block_re
            .split(section)
            .filter(|block| block.trim().len() > MIN_BLOCK_LEN)
            .map(|block| {
                let lines: Vec<&str> =
                    block.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
                Project {
                    name: lines.first().map(|l| l.to_string()),
                    description: block.to_string(),
                    technologies: contained_keywords(&block.to_lowercase(), &vocab.technologies),
                    highlights: lines
                        .iter()
                        .filter(|l| self.bullet_re.is_match(l))
                        .map(|l| self.bullet_re.replace(l, "").to_string())
                        .collect(),
                }
            })
            .collect()
    }

    pub fn extract_certifications(&self, section: Option<&str>) -> Vec<Certification> {
        let Some(section) = section else {
            return Vec::new();
        };

        section
            .lines()
            .map(str::trim)
            .filter(|l| l.len() > MIN_LINE_LEN)
            .map(|line| Certification {
                name: line.to_string(),
                issuer: self.issuer_re.captures(line).map(|c| c[1].trim().to_string()),
            })
            .collect()
    }

    pub fn extract_awards(&self, section: Option<&str>) -> Vec<Award> {
        let Some(section) = section else {
            return Vec::new();
        };

        section
            .lines()
            .map(str::trim)
            .filter(|l| l.len() > MIN_LINE_LEN)
            .map(|line| Award {
                title: line.to_string(),
            })
            .collect()
    }
}

impl Default for ProjectExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_split_on_blank_lines() {
        let section = "Inventory Tracker\nBuilt with React and MongoDB\n- Cut stockouts by 15%\n\nLog Shipper\nRust agent streaming to Elasticsearch nodes";
        let projects = ProjectExtractor::new().extract_projects(Some(section), &Vocabulary::default());
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name.as_deref(), Some("Inventory Tracker"));
        assert!(projects[0].technologies.contains(&"React".to_string()));
        assert_eq!(projects[0].highlights, vec!["Cut stockouts by 15%"]);
    }

    #[test]
    fn test_certifications_one_per_line() {
        let section = "AWS Certified Solutions Architect - Amazon Web Services\nCKA - CNCF";
        let certs = ProjectExtractor::new().extract_certifications(Some(section));
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].issuer.as_deref(), Some("Amazon Web Services"));
    }

    #[test]
    fn test_certification_without_issuer() {
        let certs = ProjectExtractor::new().extract_certifications(Some("Scrum Master"));
        assert_eq!(certs.len(), 1);
        assert!(certs[0].issuer.is_none());
    }

    #[test]
    fn test_awards_skip_short_lines() {
        let awards = ProjectExtractor::new().extract_awards(Some("Employee of the Year 2021\nok"));
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].title, "Employee of the Year 2021");
    }

    #[test]
    fn test_missing_sections_yield_empty() {
        let extractor = ProjectExtractor::new();
        assert!(extractor.extract_projects(None, &Vocabulary::default()).is_empty());
        assert!(extractor.extract_certifications(None).is_empty());
        assert!(extractor.extract_awards(None).is_empty());
    }
}
