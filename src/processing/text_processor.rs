//! Text normalization

use crate::nlp::NlpModel;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

/// Section markers that survive stop-word removal by default.
pub const DEFAULT_PROTECTED_TERMS: &[&str] = &["experience", "skills", "education"];

/// Lowercases, strips punctuation, collapses whitespace and removes stop
/// words, keeping any token listed as protected.
pub struct Normalizer {
    model: Arc<dyn NlpModel>,
    protected_terms: HashSet<String>,
    punctuation_regex: Regex,
    whitespace_regex: Regex,
}

/// Surviving tokens of a normalized text, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub tokens: Vec<String>,
}

impl NormalizedText {
    /// Tokens re-joined with single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Normalizer {
    pub fn new(model: Arc<dyn NlpModel>) -> Self {
        Self::with_protected_terms(model, DEFAULT_PROTECTED_TERMS.iter().map(|s| s.to_string()))
    }

    pub fn with_protected_terms<I>(model: Arc<dyn NlpModel>, terms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let protected_terms = terms.into_iter().map(|t| t.trim().to_lowercase()).collect();

        Self {
            model,
            protected_terms,
            punctuation_regex: Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"),
            whitespace_regex: Regex::new(r"\s+").expect("Invalid whitespace regex"),
        }
    }

    /// Lowercase, replace punctuation with spaces and collapse whitespace.
    pub fn clean_text(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let without_punctuation = self.punctuation_regex.replace_all(&lowered, " ");
        self.whitespace_regex
            .replace_all(&without_punctuation, " ")
            .trim()
            .to_string()
    }

    pub fn normalize(&self, text: &str) -> NormalizedText {
        let cleaned = self.clean_text(text);

        let tokens = self
            .model
            .tokenize(&cleaned)
            .into_iter()
            .filter(|token| !token.is_stop_word || self.protected_terms.contains(&token.text))
            .map(|token| token.text)
            .collect();

        NormalizedText { tokens }
    }

    pub fn is_protected(&self, term: &str) -> bool {
        self.protected_terms.contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::RuleBasedModel;

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(RuleBasedModel::new().unwrap()))
    }

    #[test]
    fn test_clean_text() {
        let cleaned = normalizer().clean_text("  Accounts Payable/Receivable,\n\tGAAP!!  ");
        assert_eq!(cleaned, "accounts payable receivable gaap");
    }

    #[test]
    fn test_stop_words_removed() {
        let normalized = normalizer().normalize("We are looking for an Accountant with the Excel skills.");
        assert_eq!(normalized.tokens, vec!["looking", "accountant", "excel", "skills"]);
        assert_eq!(normalized.text(), "looking accountant excel skills");
    }

    #[test]
    fn test_protected_terms_survive() {
        let model: Arc<dyn NlpModel> = Arc::new(RuleBasedModel::new().unwrap());

        // "first" is a stop word unless protected
        let plain = Normalizer::new(model.clone()).normalize("First experience");
        assert_eq!(plain.tokens, vec!["experience"]);

        let protecting = Normalizer::with_protected_terms(model, vec!["First".to_string()]);
        assert!(protecting.is_protected("first"));
        assert_eq!(protecting.normalize("First experience").tokens, vec!["first", "experience"]);
    }

    #[test]
    fn test_empty_input() {
        let normalized = normalizer().normalize("   ...  ");
        assert!(normalized.is_empty());
        assert_eq!(normalized.text(), "");
    }
}
