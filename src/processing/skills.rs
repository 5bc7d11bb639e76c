//! Skill extraction against a domain vocabulary

use crate::nlp::tokenizer;
use crate::processing::vocabulary::SkillVocabulary;
use std::collections::{BTreeSet, HashMap};

pub type SkillSet = BTreeSet<String>;

/// Finds vocabulary phrases in text by exact token comparison.
///
/// Phrases are keyed by their token sequence and looked up with a sliding
/// window over the text's tokens, so multi-word skills such as
/// "accounts payable" match while substrings of longer words never do.
/// Punctuation tokens take part in the comparison: "a/b testing" matches
/// "A/B testing" but not "a b testing".
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    phrases: HashMap<Vec<String>, String>,
    longest: usize,
}

impl SkillExtractor {
    pub fn new(vocabulary: &SkillVocabulary) -> Self {
        let mut phrases = HashMap::new();
        let mut longest = 0;

        for skill in vocabulary.skills() {
            let key = tokenizer::phrase_key(skill);
            if key.is_empty() {
                continue;
            }
            longest = longest.max(key.len());
            phrases.entry(key).or_insert_with(|| skill.clone());
        }

        Self { phrases, longest }
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = tokenizer::segments(&lowered)
            .into_iter()
            .map(|(_, s)| s.to_string())
            .collect();

        let mut skills = SkillSet::new();
        for start in 0..tokens.len() {
            let max_len = self.longest.min(tokens.len() - start);
            for len in 1..=max_len {
                if let Some(skill) = self.phrases.get(&tokens[start..start + len]) {
                    skills.insert(skill.clone());
                }
            }
        }

        skills
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}
