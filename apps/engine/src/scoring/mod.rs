//! Scoring Engine — pure functions from extracted data and raw statistics
//! to integer scores in [0, 100].
//!
//! The formulas are legacy-compatible by design: weights, caps, and keyword
//! regexes are preserved exactly so scores stay comparable across stored
//! analyses. Resist the urge to tune them.

pub mod statistics;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractors::skills::{Skill, SkillCategory};
pub use statistics::{compute_statistics, Statistics};

// All scoring patterns are fixed, so they compile once. Vocabulary-driven
// patterns (the action-verb alternation) stay in `statistics`.
static CONTACT_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)email|phone|linkedin|address|location").expect("valid regex"));
static SUMMARY_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)summary|objective|profile|about").expect("valid regex"));
static EXPERIENCE_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)experience|employment|work history").expect("valid regex"));
static EDUCATION_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)education|academic|degree|university|college").expect("valid regex")
});
static SKILLS_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)skills|technical skills|competencies|technologies").expect("valid regex")
});

static CONTACT_FIELD_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)email").expect("valid regex"),
        Regex::new(r"(?i)phone").expect("valid regex"),
        Regex::new(r"(?i)linkedin").expect("valid regex"),
        Regex::new(r"(?i)address|location").expect("valid regex"),
    ]
});

static SUMMARY_TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(years?|experienced?|professional|expert|skilled?)\b").expect("valid regex")
});
static EXPERIENCE_TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(developed?|created?|managed?|led|implemented?|designed?|increased?|reduced?|improved?)\b",
    )
    .expect("valid regex")
});
static EDUCATION_TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bachelor|master|phd|degree|diploma|certified?|certification)\b")
        .expect("valid regex")
});
static SKILLS_TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(javascript|python|java|react|node|sql|aws|azure|docker|kubernetes|git)\b")
        .expect("valid regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").expect("valid regex")
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex")
});
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin").expect("valid regex"));
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(city|state|country|address|location)\b").expect("valid regex")
});

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-•*]").expect("valid regex"));
static CAPS_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[A-Z\s]{3,20}$").expect("valid regex"));

/// Presence flags for the eight recognized sections, derived from keyword
/// regexes over the full text (not from the section locator, which is
/// stricter about header shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFlags {
    pub has_contact_info: bool,
    pub has_summary: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub has_projects: bool,
    pub has_certifications: bool,
    pub has_awards: bool,
    pub completeness_score: u32,
}

/// Flat per-section scores, kept as the legacy view older consumers read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub contact_info_score: u32,
    pub summary_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    pub skills_score: u32,
}

/// Evidence flags behind the contact-completeness score: 25 points per
/// found field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFlags {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linked_in: bool,
    pub has_location: bool,
    pub score: u32,
}

/// The fixed record of named dimension scores. Invariant: every field is
/// clamped to [0, 100].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub overall: u32,
    pub ats: u32,
    pub contact_info: u32,
    pub summary: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
    pub formatting: u32,
    pub keywords: u32,
    pub achievements: u32,
    pub clarity: u32,
    pub impact: u32,
}

/// Contact presence also accepts hard evidence (a found email or phone):
/// resumes put raw addresses in the header without ever writing the word
/// "email".
pub fn section_flags(text: &str, contact: &ContactFlags) -> SectionFlags {
    let lower = text.to_lowercase();
    let mut flags = SectionFlags {
        has_contact_info: CONTACT_KEYWORD_RE.is_match(text) || contact.score > 0,
        has_summary: SUMMARY_KEYWORD_RE.is_match(text),
        has_experience: EXPERIENCE_KEYWORD_RE.is_match(text),
        has_education: EDUCATION_KEYWORD_RE.is_match(text),
        has_skills: SKILLS_KEYWORD_RE.is_match(text),
        has_projects: lower.contains("project") || lower.contains("portfolio"),
        has_certifications: lower.contains("certification")
            || lower.contains("certificate")
            || lower.contains("license"),
        has_awards: lower.contains("award")
            || lower.contains("honor")
            || lower.contains("achievement")
            || lower.contains("recognition"),
        completeness_score: 0,
    };
    flags.completeness_score = completeness_score(&flags);
    flags
}

pub fn section_scores(text: &str, flags: &SectionFlags) -> SectionScores {
    SectionScores {
        contact_info_score: if flags.has_contact_info {
            keyword_presence_points(text, &*CONTACT_FIELD_RES)
        } else {
            0
        },
        summary_score: if flags.has_summary {
            capped_match_score(text, &SUMMARY_TERM_RE, 10)
        } else {
            0
        },
        experience_score: if flags.has_experience {
            capped_match_score(text, &EXPERIENCE_TERM_RE, 5)
        } else {
            0
        },
        education_score: if flags.has_education {
            capped_match_score(text, &EDUCATION_TERM_RE, 20)
        } else {
            0
        },
        skills_score: if flags.has_skills {
            capped_match_score(text, &SKILLS_TERM_RE, 5)
        } else {
            0
        },
    }
}

pub fn contact_flags(text: &str) -> ContactFlags {
    let has_email = EMAIL_RE.is_match(text);
    let has_phone = PHONE_RE.is_match(text);
    let has_linked_in = LINKEDIN_RE.is_match(text);
    let has_location = LOCATION_RE.is_match(text);

    let score = [has_email, has_phone, has_linked_in, has_location]
        .iter()
        .filter(|&&present| present)
        .count() as u32
        * 25;

    ContactFlags {
        has_email,
        has_phone,
        has_linked_in,
        has_location,
        score,
    }
}

/// Additive ATS model: 40 for section completeness, 30 for technical-skill
/// count, 30 for formatting/length heuristics. Monotone in each input.
pub fn ats_score(flags: &SectionFlags, skills: &[Skill], stats: &Statistics) -> u32 {
    let mut score = 0;

    if flags.has_contact_info {
        score += 10;
    }
    if flags.has_experience {
        score += 10;
    }
    if flags.has_education {
        score += 10;
    }
    if flags.has_skills {
        score += 10;
    }

    score += (technical_count(skills) * 3).min(30);

    if stats.total_pages <= 2 {
        score += 10;
    }
    if stats.action_verbs_count >= 10 {
        score += 10;
    }
    if stats.quantifiable_achievements >= 3 {
        score += 10;
    }

    score.min(100)
}

/// Weighted sum over the five section scores (weights total 0.85) plus the
/// ATS score at 0.15, plus up to 15 bonus points, clamped and rounded.
pub fn overall_score(sections: &SectionScores, ats: u32, stats: &Statistics) -> u32 {
    let weighted = sections.contact_info_score as f64 * 0.15
        + sections.summary_score as f64 * 0.10
        + sections.experience_score as f64 * 0.25
        + sections.education_score as f64 * 0.15
        + sections.skills_score as f64 * 0.20
        + ats as f64 * 0.15;

    let mut bonus = 0.0;
    if stats.total_pages <= 2 {
        bonus += 5.0;
    }
    if stats.action_verbs_count >= 10 {
        bonus += 5.0;
    }
    if stats.quantifiable_achievements >= 5 {
        bonus += 5.0;
    }

    (weighted + bonus).min(100.0).round() as u32
}

/// 70 base, +10 each for bullet markers, paragraph spacing, and an
/// ALL-CAPS header line.
pub fn formatting_score(text: &str) -> u32 {
    let mut score = 70;

    if BULLET_RE.is_match(text) {
        score += 10;
    }
    if text.contains("\n\n") {
        score += 10;
    }
    if CAPS_HEADER_RE.is_match(text) {
        score += 10;
    }

    score.min(100)
}

pub fn keyword_score(skills: &[Skill]) -> u32 {
    (skills.len() as u32 * 5 + 40).min(100)
}

pub fn achievement_score(stats: &Statistics) -> u32 {
    (stats.quantifiable_achievements * 10 + 50).min(100)
}

pub fn impact_score(stats: &Statistics) -> u32 {
    (stats.action_verbs_count * 2 + stats.quantifiable_achievements * 5 + 40).min(100)
}

fn completeness_score(flags: &SectionFlags) -> u32 {
    let mut score = 0;
    if flags.has_contact_info {
        score += 20;
    }
    if flags.has_summary {
        score += 15;
    }
    if flags.has_experience {
        score += 30;
    }
    if flags.has_education {
        score += 20;
    }
    if flags.has_skills {
        score += 15;
    }
    score
}

pub fn technical_count(skills: &[Skill]) -> u32 {
    skills
        .iter()
        .filter(|s| s.category == SkillCategory::Technical)
        .count() as u32
}

/// Assembles the full `Scores` record from the already-computed parts.
pub fn build_scores(
    sections: &SectionScores,
    contact: &ContactFlags,
    skills: &[Skill],
    stats: &Statistics,
    ats: u32,
    overall: u32,
    text: &str,
) -> Scores {
    Scores {
        overall,
        ats,
        contact_info: contact.score,
        summary: sections.summary_score,
        experience: sections.experience_score,
        education: sections.education_score,
        skills: sections.skills_score,
        formatting: formatting_score(text),
        keywords: keyword_score(skills),
        achievements: achievement_score(stats),
        clarity: stats.readability_score,
        impact: impact_score(stats),
    }
}

fn capped_match_score(text: &str, re: &Regex, points_per_match: u32) -> u32 {
    (re.find_iter(text).count() as u32 * points_per_match).min(100)
}

fn keyword_presence_points(text: &str, patterns: &[Regex]) -> u32 {
    patterns.iter().filter(|re| re.is_match(text)).count() as u32 * 25
}
