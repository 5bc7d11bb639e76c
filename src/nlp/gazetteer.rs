//! Dictionary-based named entity recognition

use crate::error::{AtsError, Result};
use crate::nlp::model::{Entity, EntityLabel};
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A known entity name and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub text: String,
    pub label: EntityLabel,
}

impl GazetteerEntry {
    pub fn new(text: &str, label: EntityLabel) -> Self {
        Self {
            text: text.to_string(),
            label,
        }
    }
}

/// Finds known entity names in text, preferring the longest name at each
/// position and only accepting matches on word boundaries.
pub struct Gazetteer {
    matcher: AhoCorasick,
    entries: Vec<GazetteerEntry>,
}

impl Gazetteer {
    /// Built-in entries extended (or overridden) by `extra`.
    pub fn with_entries(extra: Vec<GazetteerEntry>) -> Result<Self> {
        let mut entries = Self::default_entries();
        entries.extend(extra);
        Self::new(entries)
    }

    pub fn new(entries: Vec<GazetteerEntry>) -> Result<Self> {
        // Later entries win when the same name is listed twice
        let mut by_name: HashMap<String, EntityLabel> = HashMap::new();
        let mut order = Vec::new();
        for entry in entries {
            let name = entry.text.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            if by_name.insert(name.clone(), entry.label).is_none() {
                order.push(name);
            }
        }

        let entries: Vec<GazetteerEntry> = order
            .into_iter()
            .map(|name| {
                let label = by_name[&name];
                GazetteerEntry { text: name, label }
            })
            .collect();

        let patterns: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| AtsError::Configuration(format!("Failed to build entity gazetteer: {}", e)))?;

        Ok(Self { matcher, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entity spans in `text`, in order of appearance.
    pub fn find(&self, text: &str) -> Vec<Entity> {
        self.matcher
            .find_iter(text)
            .filter(|mat| on_word_boundary(text, mat.start(), mat.end()))
            .map(|mat| Entity {
                text: text[mat.start()..mat.end()].to_string(),
                label: self.entries[mat.pattern().as_usize()].label,
            })
            .collect()
    }

    fn default_entries() -> Vec<GazetteerEntry> {
        let mut entries = Vec::new();

        let organizations = [
            "google", "microsoft", "oracle", "deloitte", "pwc", "kpmg", "ernst & young",
            "accenture", "amazon", "apple", "meta", "facebook", "ibm", "intuit", "hubspot",
            "salesforce", "adobe", "sap", "bloomberg", "tiktok", "instagram", "linkedin",
            "twitter", "youtube", "acca", "cima", "aicpa", "emirates", "etisalat", "hsbc",
            "citibank", "jp morgan", "goldman sachs",
        ];
        let products = [
            "excel", "microsoft excel", "microsoft word", "microsoft dynamics", "quickbooks",
            "tableau", "power bi", "photoshop", "adobe photoshop", "illustrator",
            "adobe creative suite", "wordpress", "google analytics", "google ads",
            "google adwords", "google tag manager", "mailchimp", "hootsuite", "canva", "jira",
            "asana", "trello", "netsuite", "workday", "hyperion", "cognos", "anaplan",
            "peoplesoft", "sap s/4hana", "tally prime", "peachtree", "xero", "bloomberg terminal",
            "capital iq", "factset", "ms office",
        ];
        let places = [
            "dubai", "abu dhabi", "sharjah", "uae", "united arab emirates", "london", "new york",
            "india", "mumbai", "delhi", "bangalore", "kerala", "singapore", "usa",
            "united states", "uk", "united kingdom", "canada", "toronto", "sydney", "australia",
            "saudi arabia", "riyadh", "qatar", "doha", "oman", "bahrain", "kuwait",
        ];

        entries.extend(organizations.iter().map(|n| GazetteerEntry::new(n, EntityLabel::Organization)));
        entries.extend(products.iter().map(|n| GazetteerEntry::new(n, EntityLabel::Product)));
        entries.extend(places.iter().map(|n| GazetteerEntry::new(n, EntityLabel::Place)));
        entries
    }
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_name_wins() {
        let gazetteer = Gazetteer::with_entries(Vec::new()).unwrap();
        let entities = gazetteer.find("reporting in google analytics and microsoft excel");

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "google analytics");
        assert_eq!(entities[0].label, EntityLabel::Product);
        assert_eq!(entities[1].text, "microsoft excel");
    }

    #[test]
    fn test_word_boundaries() {
        let gazetteer = Gazetteer::with_entries(Vec::new()).unwrap();
        // "uk" inside "ukulele" and "sap" inside "sapling" are not entities
        assert!(gazetteer.find("ukulele sapling").is_empty());

        let entities = gazetteer.find("based in dubai, uae.");
        let names: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(names, vec!["dubai", "uae"]);
        assert!(entities.iter().all(|e| e.label == EntityLabel::Place));
    }

    #[test]
    fn test_extra_entries_override_labels() {
        let gazetteer = Gazetteer::with_entries(vec![
            GazetteerEntry::new("Jane Roe", EntityLabel::Person),
            GazetteerEntry::new("excel", EntityLabel::Organization),
        ])
        .unwrap();

        let entities = gazetteer.find("jane roe uses excel");
        assert_eq!(entities[0], Entity { text: "jane roe".to_string(), label: EntityLabel::Person });
        assert_eq!(entities[1].label, EntityLabel::Organization);
    }

    #[test]
    fn test_blank_entries_ignored() {
        let gazetteer = Gazetteer::new(vec![GazetteerEntry::new("  ", EntityLabel::Product)]).unwrap();
        assert!(gazetteer.is_empty());
        assert!(gazetteer.find("anything").is_empty());
    }
}
