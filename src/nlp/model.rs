//! Plain data produced by an NLP model and the trait every model implements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse word class used for noun chunking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Noun,
    Number,
    Determiner,
    Pronoun,
    Verb,
    Adverb,
    Preposition,
    Conjunction,
    Punctuation,
    Other,
}

impl WordClass {
    /// Whether the word can sit inside a noun phrase before its head.
    pub fn is_nominal(&self) -> bool {
        matches!(self, WordClass::Noun | WordClass::Number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub is_stop_word: bool,
    pub class: WordClass,
    /// Byte offset of the token in the analyzed text.
    pub offset: usize,
}

impl Token {
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    #[serde(rename = "ORG")]
    Organization,
    #[serde(rename = "PRODUCT")]
    Product,
    #[serde(rename = "GPE")]
    Place,
    #[serde(rename = "PERSON")]
    Person,
}

impl EntityLabel {
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "ORG" => Some(EntityLabel::Organization),
            "PRODUCT" => Some(EntityLabel::Product),
            "GPE" => Some(EntityLabel::Place),
            "PERSON" => Some(EntityLabel::Person),
            _ => None,
        }
    }

    pub fn all() -> Vec<EntityLabel> {
        vec![
            EntityLabel::Organization,
            EntityLabel::Product,
            EntityLabel::Place,
            EntityLabel::Person,
        ]
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Organization => write!(f, "ORG"),
            EntityLabel::Product => write!(f, "PRODUCT"),
            EntityLabel::Place => write!(f, "GPE"),
            EntityLabel::Person => write!(f, "PERSON"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub root: String,
    pub root_is_stop_word: bool,
}

/// Result of running a model over one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedText {
    pub tokens: Vec<Token>,
    pub noun_chunks: Vec<Chunk>,
    pub entities: Vec<Entity>,
}

/// A loaded language model. Models are read-only after construction and
/// are shared between analyses through an `Arc`.
pub trait NlpModel: Send + Sync {
    fn name(&self) -> &str;

    fn is_stop_word(&self, word: &str) -> bool;

    /// Split text into tokens with stop-word flags and word classes.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Full analysis: tokens, noun chunks and named entities.
    fn analyze(&self, text: &str) -> AnalyzedText;
}
