//! Raw text statistics feeding the scoring formulas.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractors::vocab::Vocabulary;

/// Page estimate assumes this many words per page.
const WORDS_PER_PAGE: u32 = 500;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));
static QUANTIFIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%|\$\d+|\d+\+").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_words: u32,
    pub total_pages: u32,
    pub keyword_density: u32,
    pub readability_score: u32,
    pub action_verbs_count: u32,
    pub quantifiable_achievements: u32,
}

pub fn compute_statistics(text: &str, vocab: &Vocabulary) -> Statistics {
    let total_words = WORD_RE.find_iter(text).count() as u32;
    let total_pages = total_words.div_ceil(WORDS_PER_PAGE);

    let action_verbs_count = count_action_verbs(text, &vocab.action_verbs);
    let quantifiable_achievements = QUANTIFIABLE_RE.find_iter(text).count() as u32;

    Statistics {
        total_words,
        total_pages,
        keyword_density: keyword_density(action_verbs_count, total_words),
        readability_score: readability(text, total_words),
        action_verbs_count,
        quantifiable_achievements,
    }
}

/// Whole-word, case-insensitive occurrence count over the fixed verb list.
fn count_action_verbs(text: &str, verbs: &[String]) -> u32 {
    if verbs.is_empty() {
        return 0;
    }
    let escaped: Vec<String> = verbs.iter().map(|v| regex::escape(v)).collect();
    let pattern = format!(r"(?i)\b(?:{})\b", escaped.join("|"));
    let re = Regex::new(&pattern).expect("valid regex");
    re.find_iter(text).count() as u32
}

/// min(100, verbs / words × 1000), rounded.
fn keyword_density(action_verbs: u32, total_words: u32) -> u32 {
    if total_words == 0 {
        return 0;
    }
    let density = action_verbs as f64 / total_words as f64 * 1000.0;
    density.min(100.0).round() as u32
}

/// Average-word-length proxy: `100 - (avg_len - 5) * 10`, clamped to
/// [0, 100]. Deliberately not a standard readability formula — downstream
/// consumers depend on this exact shape.
fn readability(text: &str, total_words: u32) -> u32 {
    if total_words == 0 {
        return 0;
    }
    let non_ws_chars = text.chars().filter(|c| !c.is_whitespace()).count();
    let avg_word_len = non_ws_chars as f64 / total_words as f64;
    (100.0 - (avg_word_len - 5.0) * 10.0).clamp(0.0, 100.0).round() as u32
}
