//! Natural language processing components
//!
//! Tokenization, stop-word classification, noun chunking and entity
//! recognition behind the [`NlpModel`] handle.

pub mod gazetteer;
pub mod model;
pub mod rule_based;
pub mod stop_words;
pub mod tokenizer;

pub use model::{AnalyzedText, Chunk, Entity, EntityLabel, NlpModel, Token, WordClass};
pub use rule_based::RuleBasedModel;
