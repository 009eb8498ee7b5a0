//! Heuristic resume analysis engine.
//!
//! Takes an already-extracted text blob plus file metadata and produces one
//! immutable [`AnalysisResult`]: located sections, extracted entities,
//! dimension scores in [0, 100], and prioritized recommendations. All
//! classification is keyword/regex based — best-effort heuristics, not a
//! verified parser — and the pipeline never hard-fails on sparse input.

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod extract;
pub mod extractors;
pub mod jitter;
pub mod recommendations;
pub mod scoring;
pub mod sections;

pub use analyzer::{AnalysisResult, Analyzer};
pub use config::Config;
pub use errors::EngineError;
pub use extract::{FileTextExtractor, FileType, RawDocument, TextExtractor};
pub use extractors::Vocabulary;
pub use jitter::RelevanceJitter;
