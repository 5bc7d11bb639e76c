//! Per-domain skill vocabularies

use crate::error::{AtsError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const ACCOUNTING: &str = include_str!("../../domains/accounting.toml");
const DIGITAL_MARKETING: &str = include_str!("../../domains/digital-marketing.toml");

/// Names of the vocabularies compiled into the binary.
pub const BUILTIN_DOMAINS: &[&str] = &["accounting", "digital-marketing"];

/// Ordered, de-duplicated list of canonical skill phrases for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillVocabulary {
    pub name: String,
    pub version: u32,
    pub description: String,
    skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    name: String,
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    skills: Vec<String>,
}

fn default_version() -> u32 {
    1
}

impl SkillVocabulary {
    /// Build a vocabulary, lowercasing phrases and dropping blanks and
    /// repeats. An empty result is a configuration error.
    pub fn new<I, S>(name: &str, skills: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills: Vec<String> = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();

        if skills.is_empty() {
            return Err(AtsError::Configuration(format!(
                "Skill vocabulary '{}' is empty",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            version: default_version(),
            description: String::new(),
            skills,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: VocabularyFile = toml::from_str(content).map_err(|e| {
            AtsError::Configuration(format!("Failed to parse skill vocabulary: {}", e))
        })?;

        let mut vocabulary = Self::new(&file.name, file.skills)?;
        vocabulary.version = file.version;
        vocabulary.description = file.description;
        Ok(vocabulary)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AtsError::Configuration(format!(
                "Failed to read skill vocabulary '{}': {}",
                path.display(),
                e
            ))
        })?;
        let vocabulary = Self::from_toml_str(&content)?;
        debug!(
            "Loaded vocabulary '{}' ({} skills) from {}",
            vocabulary.name,
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// Look up a vocabulary compiled into the binary.
    pub fn builtin(domain: &str) -> Result<Self> {
        let content = match domain.to_lowercase().replace('_', "-").as_str() {
            "accounting" => ACCOUNTING,
            "digital-marketing" => DIGITAL_MARKETING,
            other => {
                return Err(AtsError::Configuration(format!(
                    "Unknown domain '{}'. Built-in domains: {}",
                    other,
                    BUILTIN_DOMAINS.join(", ")
                )))
            }
        };
        Self::from_toml_str(content)
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
