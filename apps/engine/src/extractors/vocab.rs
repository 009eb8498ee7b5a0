//! Vocabulary tables driving the keyword-based extractors and scorers.
//!
//! The lists live here as versioned configuration data, not inline in the
//! extractors: `Vocabulary` is built from the defaults below but can be
//! deserialized from JSON to extend a list without touching extractor logic.

use serde::{Deserialize, Serialize};

const TECHNICAL_SKILLS: &[&str] = &[
    "javascript", "typescript", "python", "java", "c++", "c#", "ruby", "php", "swift", "kotlin",
    "react", "angular", "vue", "node.js", "express", "django", "flask", "spring", "asp.net",
    "html", "css", "sass", "tailwind", "bootstrap",
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
    "rest api", "graphql", "microservices", "agile", "scrum", "ci/cd",
    "machine learning", "data analysis", "ai", "tensorflow", "pytorch",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "critical thinking",
    "project management", "time management", "adaptability", "creativity", "collaboration",
];

/// Whole-word verbs counted for the statistics and ATS formulas.
const ACTION_VERBS: &[&str] = &[
    "achieved", "improved", "trained", "managed", "created", "resolved", "volunteered",
    "influenced", "increased", "decreased", "developed", "implemented", "led", "designed",
    "built", "launched", "established", "coordinated", "executed", "generated",
];

/// Shorter verb list scanned per experience/project block.
const BLOCK_ACTION_VERBS: &[&str] = &[
    "developed", "created", "managed", "led", "implemented", "designed",
    "built", "improved", "increased", "reduced", "achieved", "launched",
];

/// Display-cased technology names matched inside experience/project blocks.
const TECHNOLOGIES: &[&str] = &[
    "JavaScript", "Python", "Java", "React", "Node.js", "TypeScript", "SQL",
    "MongoDB", "AWS", "Docker", "Kubernetes", "Git", "Angular", "Vue", "C++", "C#", ".NET",
];

const POWER_WORDS: &[&str] = &[
    "achieved", "improved", "increased", "reduced", "managed", "led", "created",
];

const INDUSTRIES: &[&str] = &[
    "Technology", "Software", "Engineering", "Finance", "Healthcare", "Education",
];

const ROLES: &[&str] = &[
    "Developer", "Engineer", "Manager", "Designer", "Analyst", "Consultant",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
    pub block_action_verbs: Vec<String>,
    pub technologies: Vec<String>,
    pub power_words: Vec<String>,
    pub industries: Vec<String>,
    pub roles: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            technical_skills: owned(TECHNICAL_SKILLS),
            soft_skills: owned(SOFT_SKILLS),
            action_verbs: owned(ACTION_VERBS),
            block_action_verbs: owned(BLOCK_ACTION_VERBS),
            technologies: owned(TECHNOLOGIES),
            power_words: owned(POWER_WORDS),
            industries: owned(INDUSTRIES),
            roles: owned(ROLES),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
