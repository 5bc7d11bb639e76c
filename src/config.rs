//! Configuration management for the ATS checker

use crate::error::{AtsError, Result};
use crate::nlp::gazetteer::GazetteerEntry;
use crate::nlp::EntityLabel;
use crate::processing::keywords::DEFAULT_SECTION_HEADERS;
use crate::processing::scorer::ScoringWeights;
use crate::processing::text_processor::DEFAULT_PROTECTED_TERMS;
use crate::processing::vocabulary::{SkillVocabulary, BUILTIN_DOMAINS};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub nlp: NlpConfig,
    pub vocabulary: VocabularyConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub skills_weight: f64,
    pub text_weight: f64,
    /// Scores below this add the generic improvement suggestions.
    pub low_score_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    pub protected_terms: Vec<String>,
    pub section_headers: Vec<String>,
    pub entity_labels: Vec<String>,
    /// Extra gazetteer entries, e.g. employer or person names.
    pub entities: Vec<GazetteerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub default_domain: String,
    /// Additional vocabulary TOML files, selectable by their `name`.
    pub extra_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            skills_weight: weights.skills_weight,
            text_weight: weights.text_weight,
            low_score_threshold: 50.0,
        }
    }
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            protected_terms: DEFAULT_PROTECTED_TERMS.iter().map(|s| s.to_string()).collect(),
            section_headers: DEFAULT_SECTION_HEADERS.iter().map(|s| s.to_string()).collect(),
            entity_labels: EntityLabel::all().iter().map(|l| l.to_string()).collect(),
            entities: Vec::new(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            default_domain: "accounting".to_string(),
            extra_files: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to built-in defaults
    /// when no file exists there.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!("No config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AtsError::Configuration(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-checker")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        ScoringWeights::new(self.scoring.skills_weight, self.scoring.text_weight)?;

        let threshold = self.scoring.low_score_threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(AtsError::Configuration(format!(
                "low_score_threshold must be between 0 and 100, got {}",
                threshold
            )));
        }

        if let Some(label) = self.nlp.entity_labels.iter().find(|l| EntityLabel::parse(l).is_none()) {
            return Err(AtsError::Configuration(format!("Unknown entity label '{}'", label)));
        }

        Ok(())
    }

    /// Resolve a domain name against the built-in vocabularies and the
    /// configured extra files. `None` selects the default domain.
    pub fn vocabulary_for(&self, domain: Option<&str>) -> Result<SkillVocabulary> {
        let domain = domain.unwrap_or(&self.vocabulary.default_domain);

        for path in &self.vocabulary.extra_files {
            let vocabulary = SkillVocabulary::from_file(path)?;
            if vocabulary.name.eq_ignore_ascii_case(domain) {
                return Ok(vocabulary);
            }
        }

        SkillVocabulary::builtin(domain)
    }

    /// Every selectable vocabulary: built-ins first, then extra files.
    pub fn available_vocabularies(&self) -> Result<Vec<SkillVocabulary>> {
        let mut vocabularies = BUILTIN_DOMAINS
            .iter()
            .map(|d| SkillVocabulary::builtin(d))
            .collect::<Result<Vec<_>>>()?;

        for path in &self.vocabulary.extra_files {
            vocabularies.push(SkillVocabulary::from_file(path)?);
        }

        Ok(vocabularies)
    }
}
