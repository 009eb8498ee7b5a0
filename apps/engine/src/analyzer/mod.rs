//! Analysis Assembler — runs the locator, extractors, scorers, and
//! recommendation rules over one document and composes the immutable
//! `AnalysisResult`. Composition only; every formula lives in its own
//! module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::extract::{FileType, RawDocument};
use crate::extractors::keywords::{
    analyze_keywords, detect_career_stage, detect_industries, detect_roles, detect_seniority,
};
use crate::extractors::{
    Award, Certification, ContactDetails, ContactExtractor, EducationEntry, EducationExtractor,
    ExperienceExtractor, IndustryAnalysis, KeywordAnalysis, Project, ProjectExtractor, Skill,
    SkillsExtractor, Vocabulary, WorkExperienceEntry,
};
use crate::jitter::RelevanceJitter;
use crate::recommendations::{
    ats_warnings, content_issues, generate, AtsWarning, ContentIssue, Recommendation,
};
use crate::scoring::{
    ats_score, build_scores, compute_statistics, contact_flags, overall_score, section_flags,
    section_scores, ContactFlags, Scores, SectionFlags, SectionScores, Statistics,
};
use crate::sections::{self, SectionMap};

const ATS_PARSEABLE_THRESHOLD: u32 = 60;

/// ATS compatibility report: the ATS score plus the format signals behind
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsCompatibility {
    pub overall_score: u32,
    pub parseable: bool,
    pub format_score: u32,
    pub keyword_score: u32,
    pub warnings: Vec<AtsWarning>,
    pub has_simple_formatting: bool,
    pub has_clear_sections: bool,
}

/// Writing-quality estimate. Grammar and spelling come from the jitter (no
/// real grammar checker runs here); style and clarity reuse readability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuality {
    pub grammar_score: u32,
    pub spelling_errors: u32,
    pub style_score: u32,
    pub clarity_score: u32,
    pub issues: Vec<ContentIssue>,
}

/// The terminal aggregate of one analysis run. Created fresh per run,
/// never mutated, serializable as a single structured document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: Uuid,
    pub file_name: String,
    pub file_type: FileType,
    pub analyzed_at: DateTime<Utc>,
    pub sections: SectionFlags,
    pub section_scores: SectionScores,
    pub overall_score: u32,
    pub ats_score: u32,
    pub contact_info: ContactFlags,
    pub contact_details: ContactDetails,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub awards: Vec<Award>,
    pub skills: Vec<Skill>,
    pub keyword_analysis: KeywordAnalysis,
    pub statistics: Statistics,
    pub scores: Scores,
    pub ats_compatibility: AtsCompatibility,
    pub content_quality: ContentQuality,
    pub industry_analysis: IndustryAnalysis,
    pub recommendations: Vec<Recommendation>,
    pub extracted_sections: SectionMap,
}

pub struct Analyzer {
    vocabulary: Vocabulary,
    jitter: RelevanceJitter,
    contact: ContactExtractor,
    experience: ExperienceExtractor,
    education: EducationExtractor,
    projects: ProjectExtractor,
    skills: SkillsExtractor,
}

impl Analyzer {
    pub fn new(vocabulary: Vocabulary, jitter: RelevanceJitter) -> Self {
        Analyzer {
            vocabulary,
            jitter,
            contact: ContactExtractor::new(),
            experience: ExperienceExtractor::new(),
            education: EducationExtractor::new(),
            projects: ProjectExtractor::new(),
            skills: SkillsExtractor,
        }
    }

    /// Runs the whole pipeline over one document. Never fails: sparse or
    /// empty text degrades to near-zero scores, empty entity arrays, and a
    /// stack of high-severity recommendations.
    pub fn analyze(&mut self, doc: &RawDocument) -> AnalysisResult {
        let text = doc.text.as_str();
        let lower = text.to_lowercase();

        let section_map = sections::locate(text);
        debug!(
            experience = section_map.experience.is_some(),
            education = section_map.education.is_some(),
            skills = section_map.skills.is_some(),
            "Sections located"
        );

        let contact = contact_flags(text);
        let flags = section_flags(text, &contact);
        let per_section = section_scores(text, &flags);

        let contact_details = self.contact.extract(text);
        let work_experience = self
            .experience
            .extract(section_map.experience.as_deref(), &self.vocabulary);
        let education = self.education.extract(section_map.education.as_deref());
        let projects = self
            .projects
            .extract_projects(section_map.projects.as_deref(), &self.vocabulary);
        let certifications = self
            .projects
            .extract_certifications(section_map.certifications.as_deref());
        let awards = self.projects.extract_awards(section_map.awards.as_deref());
        let skills = self.skills.extract(&lower, &self.vocabulary, &mut self.jitter);

        let statistics = compute_statistics(text, &self.vocabulary);
        let ats = ats_score(&flags, &skills, &statistics);
        let overall = overall_score(&per_section, ats, &statistics);
        let scores = build_scores(
            &per_section,
            &contact,
            &skills,
            &statistics,
            ats,
            overall,
            text,
        );
        debug!(overall, ats, skills = skills.len(), "Scores computed");

        let keyword_analysis = analyze_keywords(&lower, &skills, &self.vocabulary);
        let industry_analysis = IndustryAnalysis {
            detected_industry: detect_industries(&lower, &self.vocabulary),
            detected_role: detect_roles(&lower, &self.vocabulary),
            seniority_level: detect_seniority(&lower),
            career_stage: detect_career_stage(statistics.total_words),
        };

        let recommendations = generate(&flags, &per_section, &skills, &statistics, &contact);

        let ats_compatibility = AtsCompatibility {
            overall_score: ats,
            parseable: ats >= ATS_PARSEABLE_THRESHOLD,
            format_score: scores.formatting,
            keyword_score: scores.keywords,
            warnings: ats_warnings(ats, &flags),
            has_simple_formatting: !text.contains('│') && !text.contains('─'),
            has_clear_sections: flags.has_contact_info && flags.has_experience,
        };

        let content_quality = ContentQuality {
            grammar_score: self.jitter.sample(85, 10),
            spelling_errors: self.jitter.sample(0, 3),
            style_score: statistics.readability_score,
            clarity_score: statistics.readability_score,
            issues: content_issues(&statistics),
        };

        AnalysisResult {
            id: Uuid::new_v4(),
            file_name: doc.file_name.clone(),
            file_type: doc.file_type,
            analyzed_at: Utc::now(),
            sections: flags,
            section_scores: per_section,
            overall_score: overall,
            ats_score: ats,
            contact_info: contact,
            contact_details,
            work_experience,
            education,
            projects,
            certifications,
            awards,
            skills,
            keyword_analysis,
            statistics,
            scores,
            ats_compatibility,
            content_quality,
            industry_analysis,
            recommendations,
            extracted_sections: section_map,
        }
    }
}
