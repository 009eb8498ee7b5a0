//! Section Locator — best-effort header scan over raw resume text.
//!
//! Each section family is located independently: the first line that
//! contains one of the family's keywords and is short enough to be a header
//! (body sentences mentioning a keyword routinely exceed the limit) starts
//! the section; the first later line that looks like a *different* family's
//! header ends it. A resume with non-standard headers simply yields `None`
//! for the sections it hides, and the rest of the pipeline carries on.

use serde::{Deserialize, Serialize};

pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile", "about"];
pub const CONTACT_KEYWORDS: &[&str] = &["contact"];
pub const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work history", "employment"];
pub const EDUCATION_KEYWORDS: &[&str] = &["education", "academic", "university", "college"];
pub const SKILLS_KEYWORDS: &[&str] = &["skills", "technical skills", "competencies", "technologies"];
pub const PROJECT_KEYWORDS: &[&str] = &["project", "portfolio"];
pub const CERTIFICATION_KEYWORDS: &[&str] = &["certification", "certificate", "license"];
pub const AWARD_KEYWORDS: &[&str] = &["award", "honor", "achievement", "recognition"];

/// Headers that terminate whatever section is currently open.
const TERMINATOR_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "project",
    "certification",
    "award",
    "summary",
];

/// Lines at or above this length are body text, never headers.
const HEADER_MAX_LEN: usize = 100;

/// How many leading lines count as the document header block.
const HEADER_BLOCK_LINES: usize = 5;

/// Character ranges of the named resume sections. A section the scan could
/// not find maps to `None` — never to an empty string standing in for
/// "not found".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMap {
    pub header: Option<String>,
    pub contact_info: Option<String>,
    pub summary: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub projects: Option<String>,
    pub certifications: Option<String>,
    pub awards: Option<String>,
    pub other: Option<String>,
}

/// Locates every known section in one pass per keyword family.
///
/// Families are scanned independently, so ambiguous headers can produce
/// overlapping ranges; downstream extractors tolerate that.
pub fn locate(text: &str) -> SectionMap {
    let header_block: String = text
        .lines()
        .take(HEADER_BLOCK_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    SectionMap {
        header: non_empty(header_block),
        contact_info: section_content(text, CONTACT_KEYWORDS),
        summary: section_content(text, SUMMARY_KEYWORDS),
        experience: section_content(text, EXPERIENCE_KEYWORDS),
        education: section_content(text, EDUCATION_KEYWORDS),
        skills: section_content(text, SKILLS_KEYWORDS),
        projects: section_content(text, PROJECT_KEYWORDS),
        certifications: section_content(text, CERTIFICATION_KEYWORDS),
        awards: section_content(text, AWARD_KEYWORDS),
        other: None,
    }
}

/// Extracts the body of the first section whose header matches one of
/// `keywords`. Returns `None` when no header line matches or the body is
/// blank.
pub fn section_content(text: &str, keywords: &[&str]) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines
        .iter()
        .position(|line| is_header_line(line, keywords))?
        + 1;

    let end = lines[start.min(lines.len())..]
        .iter()
        .position(|line| {
            TERMINATOR_KEYWORDS
                .iter()
                .any(|&k| !keywords.contains(&k) && is_header_line(line, &[k]))
        })
        .map(|offset| start + offset)
        .unwrap_or(lines.len());

    non_empty(lines[start.min(lines.len())..end].join("\n"))
}

fn is_header_line(line: &str, keywords: &[&str]) -> bool {
    if line.len() >= HEADER_MAX_LEN {
        return false;
    }
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
