//! The analysis report returned to callers

use crate::processing::keywords::KeywordSet;
use crate::processing::scorer::ScoreBreakdown;
use crate::processing::skills::SkillSet;
use serde::{Deserialize, Serialize};

pub const LOW_SCORE_SUGGESTIONS: [&str; 2] = [
    "Consider adding more relevant experience details and project descriptions",
    "Use more industry-specific terminology from the job description",
];

/// Result of one resume/job-description analysis. Lists are sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Match score in [0, 100], rounded to two decimals.
    pub similarity_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    pub keyword_matches: Vec<String>,
    pub suggestions: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    pub domain: String,
}

/// Everything the report is derived from.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub breakdown: ScoreBreakdown,
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub resume_keywords: KeywordSet,
    pub job_keywords: KeywordSet,
    pub domain: String,
}

impl AnalysisReport {
    pub fn build(inputs: ReportInputs, low_score_threshold: f64) -> Self {
        let matching: SkillSet = inputs
            .resume_skills
            .intersection(&inputs.job_skills)
            .cloned()
            .collect();
        let missing: SkillSet = inputs
            .job_skills
            .difference(&inputs.resume_skills)
            .cloned()
            .collect();
        let keyword_matches = inputs
            .resume_keywords
            .intersection(&inputs.job_keywords)
            .cloned()
            .collect();

        let suggestions = build_suggestions(&missing, inputs.breakdown.final_score, low_score_threshold);

        Self {
            similarity_score: round2(inputs.breakdown.final_score),
            matching_skills: matching.into_iter().collect(),
            missing_skills: missing.into_iter().collect(),
            resume_skills: inputs.resume_skills.into_iter().collect(),
            keyword_matches,
            suggestions,
            score_breakdown: inputs.breakdown,
            domain: inputs.domain,
        }
    }

    /// Score as a whole percentage, for display badges.
    pub fn score_percentage(&self) -> u8 {
        self.similarity_score.round().clamp(0.0, 100.0) as u8
    }
}

/// One suggestion naming the missing skills, then the generic advice when
/// the score falls below the threshold.
pub fn build_suggestions(missing_skills: &SkillSet, score: f64, low_score_threshold: f64) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing_skills.is_empty() {
        let names: Vec<&str> = missing_skills.iter().map(String::as_str).collect();
        suggestions.push(format!("Add these missing skills: {}", names.join(", ")));
    }

    if score < low_score_threshold {
        suggestions.extend(LOW_SCORE_SUGGESTIONS.iter().map(|s| s.to_string()));
    }

    suggestions
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn inputs(resume: &[&str], job: &[&str], final_score: f64) -> ReportInputs {
        ReportInputs {
            breakdown: ScoreBreakdown {
                skills_score: 0.0,
                text_similarity: 0.0,
                final_score,
            },
            resume_skills: set(resume),
            job_skills: set(job),
            resume_keywords: set(&["excel", "general ledger", "skills"]),
            job_keywords: set(&["general ledger", "skills", "dubai"]),
            domain: "accounting".to_string(),
        }
    }

    #[test]
    fn test_set_algebra() {
        let report = AnalysisReport::build(inputs(&["excel", "payroll"], &["excel", "quickbooks"], 62.5), 50.0);

        assert_eq!(report.matching_skills, vec!["excel"]);
        assert_eq!(report.missing_skills, vec!["quickbooks"]);
        assert_eq!(report.resume_skills, vec!["excel", "payroll"]);
        assert_eq!(report.keyword_matches, vec!["general ledger", "skills"]);
        assert_eq!(report.suggestions, vec!["Add these missing skills: quickbooks"]);
    }

    #[test]
    fn test_low_score_with_missing_skills_gives_three_suggestions() {
        let report = AnalysisReport::build(inputs(&[], &["quickbooks", "excel"], 40.0), 50.0);

        assert_eq!(report.suggestions.len(), 3);
        assert_eq!(report.suggestions[0], "Add these missing skills: excel, quickbooks");
        assert_eq!(report.suggestions[1], LOW_SCORE_SUGGESTIONS[0]);
        assert_eq!(report.suggestions[2], LOW_SCORE_SUGGESTIONS[1]);
    }

    #[test]
    fn test_threshold_uses_unrounded_score() {
        // 49.996 rounds to 50.0 for display but is still a low score
        let report = AnalysisReport::build(inputs(&["excel"], &["excel"], 49.996), 50.0);
        assert_eq!(report.similarity_score, 50.0);
        assert_eq!(report.suggestions.len(), 2);

        let report = AnalysisReport::build(inputs(&["excel"], &["excel"], 50.0), 50.0);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_rounding() {
        let report = AnalysisReport::build(inputs(&[], &[], 33.33333), 50.0);
        assert_eq!(report.similarity_score, 33.33);
        assert_eq!(report.score_percentage(), 33);
    }

    #[test]
    fn test_serializes_to_json() {
        let report = AnalysisReport::build(inputs(&["excel"], &["excel"], 85.0), 50.0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["similarity_score"], 85.0);
        assert_eq!(json["matching_skills"][0], "excel");
        assert!(json["suggestions"].as_array().unwrap().is_empty());
    }
}
