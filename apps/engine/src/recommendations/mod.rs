//! Recommendation Generator — a flat, fixed-order sequence of independent
//! rule checks. Each rule either appends one fixed-message recommendation
//! or does nothing; no rule suppresses another, and the check order is the
//! output order.

use serde::{Deserialize, Serialize};

use crate::extractors::skills::Skill;
use crate::scoring::{technical_count, ContactFlags, SectionFlags, SectionScores, Statistics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: String,
    pub severity: Severity,
    pub message: String,
    pub impact: String,
}

/// ATS-specific warning surfaced in the compatibility report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsWarning {
    #[serde(rename = "type")]
    pub warning_type: String,
    pub message: String,
    pub severity: String,
}

/// Writing-quality issue surfaced in the content-quality report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    pub suggestion: String,
}

/// Thresholds below/above which rules fire.
const MIN_TECHNICAL_SKILLS: u32 = 5;
const MAX_PAGES: u32 = 2;
const MIN_ACTION_VERBS: u32 = 10;
const MIN_QUANTIFIABLES: u32 = 3;
const MIN_EXPERIENCE_SCORE: u32 = 50;
const ATS_PARSEABLE_THRESHOLD: u32 = 60;
const MIN_READABILITY: u32 = 50;

pub fn generate(
    flags: &SectionFlags,
    sections: &SectionScores,
    skills: &[Skill],
    stats: &Statistics,
    contact: &ContactFlags,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let mut push = |category: &str, severity: Severity, message: &str, impact: &str| {
        recommendations.push(Recommendation {
            category: category.to_string(),
            severity,
            message: message.to_string(),
            impact: impact.to_string(),
        });
    };

    if !contact.has_email {
        push(
            "Contact Information",
            Severity::High,
            "Add a professional email address",
            "Essential for recruiters to contact you",
        );
    }
    if !contact.has_phone {
        push(
            "Contact Information",
            Severity::Medium,
            "Include a phone number",
            "Provides an alternative contact method",
        );
    }
    if !contact.has_linked_in {
        push(
            "Contact Information",
            Severity::Medium,
            "Add your LinkedIn profile URL",
            "Shows professional online presence",
        );
    }

    if !flags.has_summary {
        push(
            "Professional Summary",
            Severity::High,
            "Add a professional summary or objective",
            "Helps recruiters quickly understand your value proposition",
        );
    }
    if !flags.has_skills {
        push(
            "Skills",
            Severity::High,
            "Create a dedicated skills section",
            "Improves ATS compatibility and keyword matching",
        );
    }

    if technical_count(skills) < MIN_TECHNICAL_SKILLS {
        push(
            "Skills",
            Severity::Medium,
            "Add more technical skills relevant to your target role",
            "Increases visibility in keyword searches",
        );
    }

    if stats.total_pages > MAX_PAGES {
        push(
            "Formatting",
            Severity::High,
            "Reduce resume length to 1-2 pages",
            "Most recruiters prefer concise resumes",
        );
    }
    if stats.action_verbs_count < MIN_ACTION_VERBS {
        push(
            "Content",
            Severity::Medium,
            "Use more action verbs to describe your achievements",
            "Makes your accomplishments more impactful",
        );
    }
    if stats.quantifiable_achievements < MIN_QUANTIFIABLES {
        push(
            "Content",
            Severity::High,
            "Add quantifiable achievements (numbers, percentages, metrics)",
            "Demonstrates concrete impact of your work",
        );
    }

    if sections.experience_score < MIN_EXPERIENCE_SCORE {
        push(
            "Experience",
            Severity::High,
            "Provide more detailed descriptions of your work experience",
            "Better showcases your responsibilities and achievements",
        );
    }

    recommendations
}

pub fn ats_warnings(ats: u32, flags: &SectionFlags) -> Vec<AtsWarning> {
    let mut warnings = Vec::new();

    if ats < ATS_PARSEABLE_THRESHOLD {
        warnings.push(AtsWarning {
            warning_type: "ats_score".to_string(),
            message: "ATS score is below recommended threshold".to_string(),
            severity: "high".to_string(),
        });
    }
    if !flags.has_contact_info {
        warnings.push(AtsWarning {
            warning_type: "missing_contact".to_string(),
            message: "Contact information is incomplete".to_string(),
            severity: "critical".to_string(),
        });
    }

    warnings
}

pub fn content_issues(stats: &Statistics) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if stats.readability_score < MIN_READABILITY {
        issues.push(ContentIssue {
            issue_type: "readability".to_string(),
            description: "Content readability is below average".to_string(),
            suggestion: "Use shorter sentences and simpler words".to_string(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_inputs() -> (SectionFlags, SectionScores, Vec<Skill>, Statistics, ContactFlags) {
        (
            SectionFlags::default(),
            SectionScores::default(),
            Vec::new(),
            Statistics::default(),
            ContactFlags::default(),
        )
    }

    #[test]
    fn test_sparse_resume_fires_every_missing_rule() {
        let (flags, sections, skills, stats, contact) = empty_inputs();
        let recs = generate(&flags, &sections, &skills, &stats, &contact);
        // email, phone, linkedin, summary, skills section, tech count,
        // verbs, quantifiables, experience detail — 9 rules; the page rule
        // stays quiet at 0 pages.
        assert_eq!(recs.len(), 9);
        assert!(recs.iter().any(|r| r.severity == Severity::High));
    }

    #[test]
    fn test_check_order_is_output_order() {
        let (flags, sections, skills, stats, contact) = empty_inputs();
        let recs = generate(&flags, &sections, &skills, &stats, &contact);
        assert_eq!(recs[0].category, "Contact Information");
        assert_eq!(recs[0].message, "Add a professional email address");
        assert_eq!(recs.last().unwrap().category, "Experience");
    }

    #[test]
    fn test_same_category_rules_co_occur() {
        let (flags, sections, skills, stats, contact) = empty_inputs();
        let recs = generate(&flags, &sections, &skills, &stats, &contact);
        let contact_rules = recs
            .iter()
            .filter(|r| r.category == "Contact Information")
            .count();
        assert_eq!(contact_rules, 3);
    }

    #[test]
    fn test_satisfied_rules_stay_quiet() {
        let flags = SectionFlags {
            has_summary: true,
            has_skills: true,
            has_contact_info: true,
            ..SectionFlags::default()
        };
        let sections = SectionScores {
            experience_score: 80,
            ..SectionScores::default()
        };
        let stats = Statistics {
            total_pages: 1,
            action_verbs_count: 15,
            quantifiable_achievements: 4,
            ..Statistics::default()
        };
        let contact = ContactFlags {
            has_email: true,
            has_phone: true,
            has_linked_in: true,
            has_location: true,
            score: 100,
        };
        let recs = generate(&flags, &sections, &[], &stats, &contact);
        // Only the technical-skill-count rule fires.
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Medium);
    }

    #[test]
    fn test_long_resume_fires_page_rule() {
        let (flags, sections, skills, mut stats, contact) = empty_inputs();
        stats.total_pages = 3;
        let recs = generate(&flags, &sections, &skills, &stats, &contact);
        assert!(recs.iter().any(|r| r.category == "Formatting"));
    }

    #[test]
    fn test_ats_warnings_thresholds() {
        let flags = SectionFlags {
            has_contact_info: true,
            ..SectionFlags::default()
        };
        assert!(ats_warnings(60, &flags).is_empty());
        let warnings = ats_warnings(59, &SectionFlags::default());
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[1].severity, "critical");
    }

    #[test]
    fn test_content_issue_on_low_readability() {
        let stats = Statistics {
            readability_score: 40,
            ..Statistics::default()
        };
        assert_eq!(content_issues(&stats).len(), 1);
        let fine = Statistics {
            readability_score: 80,
            ..Statistics::default()
        };
        assert!(content_issues(&fine).is_empty());
    }

    #[test]
    fn test_severity_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }
}
