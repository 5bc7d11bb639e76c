//! Output formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        75..=89 => "STRONG",
        60..=74 => "GOOD",
        50..=59 => "FAIR",
        _ => "WEAK",
    }
}

fn generated_at() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            _ => Color::Red,
        };
        let label = score_label(score);

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_list(&self, output: &mut String, items: &[String], marker: &str, color: Color) {
        if items.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize("(none)", Color::BrightBlack)));
        }
        for item in items {
            output.push_str(&format!("  {} {}\n", self.colorize(marker, color), item));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("=== Detailed ATS Analysis Report ==="));
        output.push_str(&format!("Domain: {} | Generated: {}\n", report.domain, generated_at()));

        output.push_str(&format!(
            "\nOverall Match Score: {:.2}% {}\n",
            report.similarity_score,
            self.format_score_badge(report.score_percentage())
        ));

        if self.detailed {
            output.push_str(&format!(
                "  Skills overlap: {:.1}% | Text similarity: {:.1}%\n",
                report.score_breakdown.skills_score * 100.0,
                report.score_breakdown.text_similarity * 100.0
            ));
        }

        output.push_str(&self.format_header("Matching Skills:"));
        self.format_list(&mut output, &report.matching_skills, "✓", Color::Green);

        output.push_str(&self.format_header("Missing Skills (Important to Add):"));
        self.format_list(&mut output, &report.missing_skills, "✗", Color::Red);

        output.push_str(&self.format_header("Relevant Keywords Found:"));
        self.format_list(&mut output, &report.keyword_matches, "•", Color::Cyan);

        if self.detailed {
            output.push_str(&self.format_header("All Resume Skills:"));
            self.format_list(&mut output, &report.resume_skills, "•", Color::White);
        }

        output.push_str(&self.format_header("Suggestions for Improvement:"));
        self.format_list(&mut output, &report.suggestions, "-", Color::Yellow);

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        output.push_str(&format!("## {}\n\n", title));
        if items.is_empty() {
            output.push_str("_None_\n");
        }
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Analysis Report\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "**Domain:** {} | **Generated:** {}\n\n",
                report.domain,
                generated_at()
            ));
        }

        output.push_str(&format!(
            "**Overall Match Score:** {:.2}% ({})\n\n",
            report.similarity_score,
            score_label(report.score_percentage())
        ));

        output.push_str("| Component | Score |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!(
            "| Skills overlap | {:.1}% |\n",
            report.score_breakdown.skills_score * 100.0
        ));
        output.push_str(&format!(
            "| Text similarity | {:.1}% |\n\n",
            report.score_breakdown.text_similarity * 100.0
        ));

        Self::push_list(&mut output, "Matching Skills", &report.matching_skills);
        Self::push_list(&mut output, "Missing Skills", &report.missing_skills);
        Self::push_list(&mut output, "Relevant Keywords", &report.keyword_matches);
        Self::push_list(&mut output, "Suggestions", &report.suggestions);

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::ScoreBreakdown;

    fn report() -> AnalysisReport {
        AnalysisReport {
            similarity_score: 42.5,
            matching_skills: vec!["excel".to_string()],
            missing_skills: vec!["quickbooks".to_string()],
            resume_skills: vec!["excel".to_string(), "payroll".to_string()],
            keyword_matches: vec!["general ledger".to_string()],
            suggestions: vec!["Add these missing skills: quickbooks".to_string()],
            score_breakdown: ScoreBreakdown {
                skills_score: 0.5,
                text_similarity: 0.25,
                final_score: 42.5,
            },
            domain: "accounting".to_string(),
        }
    }

    #[test]
    fn test_console_plain() {
        let output = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();
        assert!(output.contains("Overall Match Score: 42.50% [WEAK]"));
        assert!(output.contains("✓ excel"));
        assert!(output.contains("✗ quickbooks"));
        assert!(output.contains("• payroll"));
        assert!(output.contains("- Add these missing skills: quickbooks"));
    }

    #[test]
    fn test_json_output() {
        let output = ReportGenerator::with_options(false, false, false, false)
            .generate_report(&report(), &OutputFormat::Json)
            .unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report());
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(false).format_report(&report()).unwrap();
        assert!(output.starts_with("# ATS Analysis Report"));
        assert!(output.contains("| Skills overlap | 50.0% |"));
        assert!(output.contains("## Missing Skills\n\n- quickbooks"));
        assert!(!output.contains("Generated"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "cv/jane.pdf", false), "jane_ats.json");
        assert!(suggest_filename(&OutputFormat::Markdown, "jane.pdf", true).ends_with(".md"));
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.txt");
        save_report_to_file("hello", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
