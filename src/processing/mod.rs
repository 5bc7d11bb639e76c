//! Scoring pipeline: normalization, skill and keyword extraction, scoring

pub mod text_processor;
pub mod vocabulary;
pub mod skills;
pub mod keywords;
pub mod scorer;
pub mod analyzer;

pub use analyzer::AtsChecker;
