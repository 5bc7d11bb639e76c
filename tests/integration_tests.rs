//! Integration tests for the ATS checker

use ats_checker::config::Config;
use ats_checker::input::InputManager;
use ats_checker::nlp::{NlpModel, RuleBasedModel};
use ats_checker::output::report::LOW_SCORE_SUGGESTIONS;
use ats_checker::processing::analyzer::{analyze_with_timeout, AtsChecker};
use ats_checker::processing::vocabulary::SkillVocabulary;
use ats_checker::AtsError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

fn checker(domain: &str) -> AtsChecker {
    let model: Arc<dyn NlpModel> = Arc::new(RuleBasedModel::new().unwrap());
    let vocabulary = SkillVocabulary::builtin(domain).unwrap();
    AtsChecker::new(model, &vocabulary, &Config::default()).unwrap()
}

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

fn job(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}

#[test]
fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let text = manager.extract_text(&fixture("sample_resume.txt")).unwrap();

    assert!(text.contains("Jane Roe"));
    assert!(text.contains("Senior Accountant"));
    assert!(text.contains("Tally Prime"));
}

#[test]
fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let text = manager.extract_text(&fixture("sample_resume.md")).unwrap();

    assert!(text.contains("Jane Roe"));
    assert!(text.contains("accounts payable"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[test]
fn test_text_extraction_from_pdf_keeps_page_order() {
    let manager = InputManager::new();
    let text = manager.extract_text(&fixture("two_page_resume.pdf")).unwrap();

    let first_page = text.find("Senior Accountant").expect("first page text");
    let second_page = text.find("Bachelor of Commerce").expect("second page text");
    assert!(first_page < second_page);
    assert!(text.contains("general ledger"));
    assert!(text.contains("budgeting"));
}

#[test]
fn test_pdf_resume_report() {
    let checker = checker("accounting");
    let report = checker
        .analyze_resume(&fixture("two_page_resume.pdf"), &job("accounting_job.txt"))
        .unwrap();

    for skill in ["excel", "general ledger", "accounts payable", "budgeting"] {
        assert!(report.matching_skills.contains(&skill.to_string()), "expected match: {}", skill);
    }
    for skill in ["payroll", "month end close"] {
        assert!(report.resume_skills.contains(&skill.to_string()), "expected resume skill: {}", skill);
    }
    assert!(report.missing_skills.contains(&"quickbooks".to_string()));
    assert!((0.0..=100.0).contains(&report.similarity_score));
}

#[test]
fn test_accounting_resume_report() {
    let checker = checker("accounting");
    let report = checker
        .analyze_resume(&fixture("sample_resume.txt"), &job("accounting_job.txt"))
        .unwrap();

    for skill in ["excel", "general ledger", "accounts payable", "budgeting", "financial statements"] {
        assert!(report.matching_skills.contains(&skill.to_string()), "expected match: {}", skill);
    }
    for skill in ["quickbooks", "gaap", "tax preparation"] {
        assert!(report.missing_skills.contains(&skill.to_string()), "expected gap: {}", skill);
    }
    for skill in ["payroll", "tally prime", "bank reconciliation", "month end close"] {
        assert!(report.resume_skills.contains(&skill.to_string()), "expected resume skill: {}", skill);
    }

    assert!(report.keyword_matches.contains(&"skills".to_string()));
    assert!((0.0..=100.0).contains(&report.similarity_score));
    assert!(report.suggestions[0].starts_with("Add these missing skills: "));
    assert!(report.suggestions[0].contains("quickbooks"));
    assert_eq!(report.domain, "accounting");
}

#[test]
fn test_matching_and_missing_partition_job_skills() {
    let checker = checker("accounting");
    let job_text = job("accounting_job.txt");
    let report = checker
        .analyze_resume(&fixture("sample_resume.md"), &job_text)
        .unwrap();

    let job_skills = checker.scorer().skill_extractor().extract(&job_text);
    let mut union: Vec<String> = report
        .matching_skills
        .iter()
        .chain(report.missing_skills.iter())
        .cloned()
        .collect();
    union.sort();

    assert_eq!(union, job_skills.into_iter().collect::<Vec<_>>());
    assert!(report.matching_skills.iter().all(|s| !report.missing_skills.contains(s)));
}

#[test]
fn test_wrong_domain_scores_low() {
    let checker = checker("digital-marketing");
    let report = checker
        .analyze_resume(&fixture("sample_resume.txt"), &job("marketing_job.txt"))
        .unwrap();

    assert!(report.matching_skills.is_empty());
    assert!(report.missing_skills.contains(&"google analytics".to_string()));
    assert!(report.missing_skills.contains(&"seo".to_string()));
    assert!(report.similarity_score < 50.0);
    assert_eq!(report.suggestions.len(), 3);
    assert_eq!(report.suggestions[1], LOW_SCORE_SUGGESTIONS[0]);
    assert_eq!(report.suggestions[2], LOW_SCORE_SUGGESTIONS[1]);
}

#[test]
fn test_self_similarity_is_maximal() {
    let checker = checker("accounting");
    let job_text = job("accounting_job.txt");
    let report = checker.analyze_text(&job_text, &job_text);

    assert_eq!(report.similarity_score, 100.0);
    assert!(report.missing_skills.is_empty());
    assert!(report.suggestions.is_empty());
}

#[test]
fn test_deterministic() {
    let checker = checker("accounting");
    let job_text = job("accounting_job.txt");
    let first = checker.analyze_resume(&fixture("sample_resume.txt"), &job_text).unwrap();
    let second = checker.analyze_resume(&fixture("sample_resume.txt"), &job_text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_job_description() {
    let checker = checker("accounting");
    let report = checker.analyze_resume(&fixture("sample_resume.txt"), "").unwrap();

    assert_eq!(report.score_breakdown.skills_score, 0.0);
    assert!(report.missing_skills.is_empty());
    assert!(report.matching_skills.is_empty());
    assert_eq!(report.similarity_score, 0.0);
    assert!(!report.resume_skills.is_empty());
}

#[test]
fn test_unreadable_resume_gives_no_report() {
    let checker = checker("accounting");
    let job_text = job("accounting_job.txt");

    let corrupt = checker.analyze_resume(&fixture("corrupt.pdf"), &job_text);
    assert!(matches!(corrupt, Err(AtsError::Extraction(_))));

    let missing = checker.analyze_resume(&fixture("nonexistent.txt"), &job_text);
    assert!(matches!(missing, Err(AtsError::Extraction(_))));

    let unsupported = checker.analyze_resume(&fixture("unsupported.xyz"), &job_text);
    assert!(matches!(unsupported, Err(AtsError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_analysis_with_timeout() {
    let checker = Arc::new(checker("accounting"));

    let report = analyze_with_timeout(
        checker.clone(),
        fixture("sample_resume.txt"),
        job("accounting_job.txt"),
        Duration::from_secs(30),
    )
    .await
    .unwrap();
    assert!(report.matching_skills.contains(&"excel".to_string()));

    let failure = analyze_with_timeout(
        checker,
        fixture("nonexistent.txt"),
        job("accounting_job.txt"),
        Duration::from_secs(30),
    )
    .await;
    assert!(failure.unwrap_err().is_extraction());
}
