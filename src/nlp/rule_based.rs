//! Rule-based English model: lexicon word classes, stop words, a
//! determiner/nominal-run chunker and a gazetteer for entities.

use crate::error::Result;
use crate::nlp::gazetteer::{Gazetteer, GazetteerEntry};
use crate::nlp::model::{AnalyzedText, Chunk, NlpModel, Token, WordClass};
use crate::nlp::stop_words;
use crate::nlp::tokenizer;
use log::debug;
use std::collections::{HashMap, HashSet};

pub struct RuleBasedModel {
    stop_words: HashSet<String>,
    lexicon: HashMap<&'static str, WordClass>,
    /// Words that read as verbs at the start of a clause and as nouns
    /// after a modifier ("process invoices" vs "the close process").
    ambiguous: HashSet<&'static str>,
    gazetteer: Gazetteer,
}

impl RuleBasedModel {
    pub fn new() -> Result<Self> {
        Self::with_entities(Vec::new())
    }

    /// Model whose entity gazetteer is extended with `entities`.
    pub fn with_entities(entities: Vec<GazetteerEntry>) -> Result<Self> {
        let gazetteer = Gazetteer::with_entries(entities)?;
        debug!("Rule-based model loaded with {} gazetteer entries", gazetteer.len());

        Ok(Self {
            stop_words: stop_words::english(),
            lexicon: Self::create_lexicon(),
            ambiguous: AMBIGUOUS.iter().copied().collect(),
            gazetteer,
        })
    }

    fn classify(&self, word: &str, prev: Option<&Token>) -> WordClass {
        if !word.chars().any(char::is_alphanumeric) {
            return WordClass::Punctuation;
        }
        if prev.is_some_and(|p| p.text == "'" || p.text == "\u{2019}") && CLITICS.contains(&word.to_lowercase().as_str()) {
            return WordClass::Other;
        }
        if word.starts_with(|c: char| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return WordClass::Number;
        }

        let lower = word.to_lowercase();
        if self.ambiguous.contains(lower.as_str()) {
            return match prev {
                None => WordClass::Verb,
                Some(p) if p.text.eq_ignore_ascii_case("to") => WordClass::Verb,
                Some(p) => match p.class {
                    WordClass::Punctuation
                    | WordClass::Pronoun
                    | WordClass::Adverb
                    | WordClass::Verb
                    | WordClass::Conjunction => WordClass::Verb,
                    _ => WordClass::Noun,
                },
            };
        }
        if let Some(class) = self.lexicon.get(lower.as_str()) {
            return *class;
        }

        let len = lower.chars().count();
        if len > 4 && lower.ends_with("ly") && !NOUNS_ENDING_IN_LY.contains(&lower.as_str()) {
            WordClass::Adverb
        } else if len > 5 && lower.ends_with("ed") {
            WordClass::Verb
        } else {
            WordClass::Noun
        }
    }

    fn noun_chunks(&self, text: &str, tokens: &[Token]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            match token.class {
                WordClass::Pronoun => {
                    chunks.push(Chunk {
                        text: token.text.clone(),
                        root: token.text.clone(),
                        root_is_stop_word: token.is_stop_word,
                    });
                    i += 1;
                }
                WordClass::Determiner | WordClass::Noun | WordClass::Number => {
                    let start = i;
                    let mut j = i;
                    if tokens[j].class == WordClass::Determiner {
                        j += 1;
                    }

                    let mut root = None;
                    while j < tokens.len() {
                        let current = &tokens[j];
                        if current.class.is_nominal() && (j == start || same_line(text, &tokens[j - 1], current)) {
                            if current.class == WordClass::Noun {
                                root = Some(j);
                            }
                            j += 1;
                        } else if is_connector(current)
                            && j > start
                            && j + 1 < tokens.len()
                            && tokens[j - 1].class.is_nominal()
                            && tokens[j + 1].class != WordClass::Punctuation
                            && tokens[j - 1].end() == current.offset
                            && current.end() == tokens[j + 1].offset
                        {
                            // Compound modifier such as "detail-oriented"
                            if tokens[j + 1].class == WordClass::Noun {
                                root = Some(j + 1);
                            }
                            j += 2;
                        } else {
                            break;
                        }
                    }

                    match root {
                        Some(r) => {
                            let root_token = &tokens[r];
                            chunks.push(Chunk {
                                text: text[tokens[start].offset..root_token.end()].to_string(),
                                root: root_token.text.clone(),
                                root_is_stop_word: root_token.is_stop_word,
                            });
                            i = r + 1;
                        }
                        None => i = j.max(i + 1),
                    }
                }
                _ => i += 1,
            }
        }

        chunks
    }

    fn create_lexicon() -> HashMap<&'static str, WordClass> {
        let mut lexicon = HashMap::new();
        let classes: [(&[&'static str], WordClass); 7] = [
            (DETERMINERS, WordClass::Determiner),
            (PRONOUNS, WordClass::Pronoun),
            (PREPOSITIONS, WordClass::Preposition),
            (CONJUNCTIONS, WordClass::Conjunction),
            (VERBS, WordClass::Verb),
            (ADVERBS, WordClass::Adverb),
            (OTHER, WordClass::Other),
        ];
        for (words, class) in classes {
            for word in words {
                lexicon.insert(*word, class);
            }
        }
        lexicon
    }
}

impl NlpModel for RuleBasedModel {
    fn name(&self) -> &str {
        "rule-based-en"
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        for (offset, segment) in tokenizer::segments(text) {
            let class = self.classify(segment, tokens.last());
            tokens.push(Token {
                text: segment.to_string(),
                is_stop_word: self.is_stop_word(segment),
                class,
                offset,
            });
        }
        tokens
    }

    fn analyze(&self, text: &str) -> AnalyzedText {
        let tokens = self.tokenize(text);
        let noun_chunks = self.noun_chunks(text, &tokens);
        let entities = self.gazetteer.find(text);
        debug!(
            "Analyzed {} tokens: {} noun chunks, {} entities",
            tokens.len(),
            noun_chunks.len(),
            entities.len()
        );

        AnalyzedText {
            tokens,
            noun_chunks,
            entities,
        }
    }
}

fn same_line(text: &str, prev: &Token, next: &Token) -> bool {
    !text[prev.end()..next.offset].contains('\n')
}

fn is_connector(token: &Token) -> bool {
    token.text == "-" || token.text == "/"
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "all",
    "no", "another", "either", "neither", "both", "my", "your", "his", "her", "its", "our",
    "their", "whose", "which", "what", "several", "many", "much", "few",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "we", "us", "you", "he", "him", "she", "it", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "someone", "anyone", "everyone", "something", "anything", "nothing", "everything", "mine",
    "yours", "ours", "theirs",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "over", "under",
    "about", "across", "after", "before", "between", "through", "during", "without", "within",
    "against", "among", "toward", "towards", "upon", "via", "per", "including", "like", "as",
    "than", "behind", "beyond", "throughout", "along", "around",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "because", "although", "though", "while", "if", "unless",
    "whereas", "whether", "so",
];

const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "can", "could", "should", "may", "might", "must", "shall", "ca",
    "looking", "join", "joining", "maintain", "prepare", "assist", "reconcile", "collaborate",
    "ensure", "develop", "execute", "create", "optimize", "manage", "analyze", "analyse", "seek",
    "seeking", "use", "include", "provide", "perform", "oversee", "oversaw", "coordinate",
    "require", "requires", "need", "needs", "want", "help", "build", "grow", "make", "get",
    "know", "apply", "handle", "deliver", "implement", "improve", "increase", "reduce", "led",
    "ran", "made", "built",
];

const ADVERBS: &[&str] = &[
    "not", "very", "also", "too", "just", "only", "really", "quite", "well", "then", "there",
    "here", "now", "always", "often", "never", "ever", "already", "still", "even", "rather",
    "almost",
];

const OTHER: &[&str] = &["please", "yes", "ok", "etc"];

const AMBIGUOUS: &[&str] = &[
    "process", "support", "report", "lead", "drive", "track", "work", "design", "plan",
    "control", "budget", "forecast", "audit", "review", "market",
];

/// Word endings split off by an apostrophe: "excel's", "don't".
const CLITICS: &[&str] = &["s", "t", "d", "ll", "m", "re", "ve"];

const NOUNS_ENDING_IN_LY: &[&str] = &["supply", "family", "assembly", "anomaly", "monopoly", "rally", "italy"];
