//! Weighted similarity scoring: skill overlap plus bag-of-words cosine

use crate::error::{AtsError, Result};
use crate::processing::skills::{SkillExtractor, SkillSet};
use crate::processing::text_processor::Normalizer;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills_weight: f64,
    pub text_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills_weight: 0.7,
            text_weight: 0.3,
        }
    }
}

impl ScoringWeights {
    pub fn new(skills_weight: f64, text_weight: f64) -> Result<Self> {
        let weights = Self {
            skills_weight,
            text_weight,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Both weights in [0, 1] and summing to 1.
    pub fn validate(&self) -> Result<()> {
        let in_range = |w: f64| w.is_finite() && (0.0..=1.0).contains(&w);
        if !in_range(self.skills_weight) || !in_range(self.text_weight) {
            return Err(AtsError::Configuration(format!(
                "Scoring weights must be between 0 and 1 (skills: {}, text: {})",
                self.skills_weight, self.text_weight
            )));
        }
        if ((self.skills_weight + self.text_weight) - 1.0).abs() > 1e-6 {
            return Err(AtsError::Configuration(format!(
                "Scoring weights must sum to 1 (skills: {}, text: {})",
                self.skills_weight, self.text_weight
            )));
        }
        Ok(())
    }
}

/// Component scores behind one similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Share of job skills present in the resume, in [0, 1].
    pub skills_score: f64,
    /// Cosine of the two token-count vectors, in [0, 1].
    pub text_similarity: f64,
    /// Weighted score in [0, 100], unrounded.
    pub final_score: f64,
}

pub struct Scorer {
    skills: SkillExtractor,
    normalizer: Normalizer,
    weights: ScoringWeights,
    term_regex: Regex,
}

impl Scorer {
    pub fn new(skills: SkillExtractor, normalizer: Normalizer, weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            skills,
            normalizer,
            weights,
            // Terms of two or more word characters
            term_regex: Regex::new(r"\b\w\w+\b").expect("Invalid term regex"),
        })
    }

    pub fn skill_extractor(&self) -> &SkillExtractor {
        &self.skills
    }

    /// Score in [0, 100] for a resume against a job description.
    pub fn calculate_similarity(&self, resume_text: &str, job_text: &str) -> f64 {
        self.score(resume_text, job_text).final_score
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> ScoreBreakdown {
        let resume_skills = self.skills.extract(resume_text);
        let job_skills = self.skills.extract(job_text);
        let skills_score = skills_overlap(&resume_skills, &job_skills);

        let resume_doc = self.normalizer.normalize(resume_text).text();
        let job_doc = self.normalizer.normalize(job_text).text();
        let text_similarity = self.text_similarity(&resume_doc, &job_doc);

        let final_score = ((skills_score * self.weights.skills_weight
            + text_similarity * self.weights.text_weight)
            * 100.0)
            .clamp(0.0, 100.0);

        debug!(
            "Skills score {:.3} ({} of {} job skills), text similarity {:.3}, final {:.2}",
            skills_score,
            resume_skills.intersection(&job_skills).count(),
            job_skills.len(),
            text_similarity,
            final_score
        );

        ScoreBreakdown {
            skills_score,
            text_similarity,
            final_score,
        }
    }

    /// Cosine similarity of raw term counts over the union vocabulary of
    /// both documents.
    pub fn text_similarity(&self, first: &str, second: &str) -> f64 {
        let a = self.term_counts(first);
        let b = self.term_counts(second);
        cosine_similarity(&a, &b)
    }

    fn term_counts(&self, document: &str) -> HashMap<String, f64> {
        let mut counts = HashMap::new();
        for term in self.term_regex.find_iter(document) {
            *counts.entry(term.as_str().to_string()).or_insert(0.0) += 1.0;
        }
        counts
    }
}

/// |resume ∩ job| / |job|, or 0 when the job lists no known skills.
pub fn skills_overlap(resume_skills: &SkillSet, job_skills: &SkillSet) -> f64 {
    if job_skills.is_empty() {
        warn!("No vocabulary skills found in the job description; skills score is 0");
        return 0.0;
    }
    resume_skills.intersection(job_skills).count() as f64 / job_skills.len() as f64
}

/// Cosine of two sparse count vectors; 0 when either is the zero vector.
pub fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let norm = |v: &HashMap<String, f64>| v.values().map(|x| x * x).sum::<f64>().sqrt();
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
