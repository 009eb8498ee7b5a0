//! Heuristic extractors: independent, side-effect-free scanners that turn
//! raw text (or a located section) into typed partial records.

pub mod contact;
pub mod education;
pub mod experience;
pub mod keywords;
pub mod projects;
pub mod skills;
pub mod vocab;

pub use contact::{ContactDetails, ContactExtractor};
pub use education::{EducationEntry, EducationExtractor};
pub use experience::{ExperienceExtractor, WorkExperienceEntry};
pub use keywords::{IndustryAnalysis, KeywordAnalysis};
pub use projects::{Award, Certification, Project, ProjectExtractor};
pub use skills::{Skill, SkillCategory, SkillsExtractor};
pub use vocab::Vocabulary;
