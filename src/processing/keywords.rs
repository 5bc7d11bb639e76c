//! Keyword extraction: noun chunks, named entities and section headers

use crate::nlp::{EntityLabel, NlpModel};
use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

pub type KeywordSet = BTreeSet<String>;

pub const DEFAULT_SECTION_HEADERS: &[&str] =
    &["experience", "education", "skills", "projects", "achievements"];

pub struct KeywordExtractor {
    model: Arc<dyn NlpModel>,
    section_headers: Vec<String>,
    entity_labels: HashSet<EntityLabel>,
}

impl KeywordExtractor {
    pub fn new(model: Arc<dyn NlpModel>) -> Self {
        Self::with_options(
            model,
            DEFAULT_SECTION_HEADERS.iter().map(|s| s.to_string()).collect(),
            EntityLabel::all(),
        )
    }

    pub fn with_options(
        model: Arc<dyn NlpModel>,
        section_headers: Vec<String>,
        entity_labels: Vec<EntityLabel>,
    ) -> Self {
        Self {
            model,
            section_headers: section_headers
                .into_iter()
                .map(|h| h.trim().to_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
            entity_labels: entity_labels.into_iter().collect(),
        }
    }

    /// Union of noun chunks with a non-stop-word head, entities with an
    /// accepted label, and section headers found anywhere in the text.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let lowered = text.to_lowercase();
        let analyzed = self.model.analyze(&lowered);
        let mut keywords = KeywordSet::new();

        for chunk in analyzed.noun_chunks {
            if !chunk.root_is_stop_word {
                keywords.insert(chunk.text);
            }
        }

        for entity in analyzed.entities {
            if self.entity_labels.contains(&entity.label) {
                keywords.insert(entity.text);
            }
        }

        for header in &self.section_headers {
            if lowered.contains(header.as_str()) {
                keywords.insert(header.clone());
            }
        }

        debug!("Extracted {} keywords", keywords.len());
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::RuleBasedModel;

    fn model() -> Arc<dyn NlpModel> {
        Arc::new(RuleBasedModel::new().unwrap())
    }

    #[test]
    fn test_chunks_entities_and_sections() {
        let extractor = KeywordExtractor::new(model());
        let keywords = extractor.extract("EXPERIENCE\nSenior Accountant at Deloitte, Dubai. We closed the books.");

        assert!(keywords.contains("experience"));
        assert!(keywords.contains("senior accountant"));
        assert!(keywords.contains("deloitte"));
        assert!(keywords.contains("dubai"));
        assert!(keywords.contains("the books"));
        // pronoun chunk has a stop-word head
        assert!(!keywords.contains("we"));
    }

    #[test]
    fn test_section_headers_match_as_substrings() {
        let extractor = KeywordExtractor::new(model());
        let keywords = extractor.extract("Key achievements: reduced DSO");
        assert!(keywords.contains("achievements"));

        // "skills" is found inside "upskills"
        let keywords = extractor.extract("upskills");
        assert!(keywords.contains("skills"));
    }

    #[test]
    fn test_entity_label_filter() {
        let extractor = KeywordExtractor::with_options(model(), Vec::new(), vec![EntityLabel::Place]);
        let keywords = extractor.extract("deloitte, london");
        assert!(keywords.contains("london"));
        // still a noun chunk, but not an accepted entity
        assert!(keywords.contains("deloitte"));

        let keywords = extractor.extract("microsoft excel");
        assert!(!keywords.contains("excel"));
    }

    #[test]
    fn test_empty_text() {
        let extractor = KeywordExtractor::new(model());
        assert!(extractor.extract("").is_empty());
    }
}
