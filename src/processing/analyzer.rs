//! Analysis pipeline: extraction, scoring, skill and keyword sets, report

use crate::config::Config;
use crate::error::{AtsError, Result};
use crate::input::{FileType, InputManager};
use crate::nlp::{EntityLabel, NlpModel};
use crate::output::report::{AnalysisReport, ReportInputs};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::scorer::{Scorer, ScoringWeights};
use crate::processing::skills::SkillExtractor;
use crate::processing::text_processor::Normalizer;
use crate::processing::vocabulary::SkillVocabulary;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Screens resumes against job descriptions for one skill domain.
///
/// Everything is built up front, so an empty vocabulary or bad weights
/// fail before any document is read. The checker holds no mutable state
/// and can run any number of sequential analyses.
pub struct AtsChecker {
    input_manager: InputManager,
    scorer: Scorer,
    keywords: KeywordExtractor,
    domain: String,
    low_score_threshold: f64,
}

impl AtsChecker {
    pub fn new(model: Arc<dyn NlpModel>, vocabulary: &SkillVocabulary, config: &Config) -> Result<Self> {
        config.validate()?;
        if vocabulary.is_empty() {
            return Err(AtsError::Configuration(format!(
                "Skill vocabulary '{}' is empty",
                vocabulary.name
            )));
        }

        let weights = ScoringWeights::new(config.scoring.skills_weight, config.scoring.text_weight)?;
        let normalizer = Normalizer::with_protected_terms(model.clone(), config.nlp.protected_terms.clone());
        let scorer = Scorer::new(SkillExtractor::new(vocabulary), normalizer, weights)?;

        let entity_labels = config
            .nlp
            .entity_labels
            .iter()
            .map(|label| {
                EntityLabel::parse(label).ok_or_else(|| {
                    AtsError::Configuration(format!("Unknown entity label '{}'", label))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let keywords = KeywordExtractor::with_options(model.clone(), config.nlp.section_headers.clone(), entity_labels);

        info!(
            "ATS checker ready: domain '{}' with {} skills, model {}",
            vocabulary.name,
            vocabulary.len(),
            model.name()
        );

        Ok(Self {
            input_manager: InputManager::new(),
            scorer,
            keywords,
            domain: vocabulary.name.clone(),
            low_score_threshold: config.scoring.low_score_threshold,
        })
    }

    /// Checker with default configuration.
    pub fn with_defaults(model: Arc<dyn NlpModel>, vocabulary: &SkillVocabulary) -> Result<Self> {
        Self::new(model, vocabulary, &Config::default())
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Analyze a resume file. Extraction failure returns an error and no
    /// report.
    pub fn analyze_resume(&self, resume_path: &Path, job_description: &str) -> Result<AnalysisReport> {
        let resume_text = self.input_manager.extract_text(resume_path)?;
        Ok(self.analyze_text(&resume_text, job_description))
    }

    /// Analyze an in-memory resume of a known format.
    pub fn analyze_bytes(&self, resume: &[u8], file_type: FileType, job_description: &str) -> Result<AnalysisReport> {
        let resume_text = self.input_manager.extract_bytes(resume, file_type)?;
        Ok(self.analyze_text(&resume_text, job_description))
    }

    /// Analyze already-extracted resume text.
    pub fn analyze_text(&self, resume_text: &str, job_description: &str) -> AnalysisReport {
        info!("Analyzing resume against job description ({} domain)", self.domain);

        let breakdown = self.scorer.score(resume_text, job_description);
        let skills = self.scorer.skill_extractor();
        let resume_skills = skills.extract(resume_text);
        let job_skills = skills.extract(job_description);
        if job_skills.is_empty() {
            warn!("Job description contains no '{}' skills", self.domain);
        }

        let report = AnalysisReport::build(
            ReportInputs {
                breakdown,
                resume_skills,
                job_skills,
                resume_keywords: self.keywords.extract(resume_text),
                job_keywords: self.keywords.extract(job_description),
                domain: self.domain.clone(),
            },
            self.low_score_threshold,
        );

        info!(
            "Match score {:.2}% ({} matching, {} missing skills)",
            report.similarity_score,
            report.matching_skills.len(),
            report.missing_skills.len()
        );
        report
    }
}

/// Run [`AtsChecker::analyze_resume`] on a blocking thread, giving up after
/// `timeout`. On timeout the blocking work is abandoned, not cancelled: it
/// runs to completion and its result is dropped.
pub async fn analyze_with_timeout(
    checker: Arc<AtsChecker>,
    resume_path: PathBuf,
    job_description: String,
    timeout: Duration,
) -> Result<AnalysisReport> {
    let task = tokio::task::spawn_blocking(move || checker.analyze_resume(&resume_path, &job_description));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(AtsError::InvalidInput(format!(
            "Analysis task failed: {}",
            join_error
        ))),
        Err(_) => Err(AtsError::Timeout(timeout.as_secs())),
    }
}
