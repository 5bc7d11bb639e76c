//! CLI interface for the ATS checker

use crate::config::OutputFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ats-checker")]
#[command(about = "Score a resume against a job description the way an ATS would")]
#[command(long_about = "Compare a resume with a job description: skill gaps, keyword overlap and a weighted match score for a chosen skill domain")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    #[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_text"])))]
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description text
        #[arg(long)]
        job_text: Option<String>,

        /// Skill domain, e.g. accounting or digital-marketing
        #[arg(short, long)]
        domain: Option<String>,

        /// Skill vocabulary TOML file, overrides --domain
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Give up after this many seconds
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,

        /// Include the score breakdown and every resume skill
        #[arg(long)]
        detailed: bool,
    },

    /// List available skill domains
    Domains,

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }

    #[test]
    fn test_analyze_requires_a_job_source() {
        assert!(Cli::try_parse_from(["ats-checker", "analyze", "--resume", "cv.pdf"]).is_err());

        let cli = Cli::try_parse_from([
            "ats-checker", "analyze", "--resume", "cv.pdf", "--job-text", "excel", "--domain", "accounting",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze { job_text, domain, timeout_secs, .. } => {
                assert_eq!(job_text.as_deref(), Some("excel"));
                assert_eq!(domain.as_deref(), Some("accounting"));
                assert_eq!(timeout_secs, 60);
            }
            _ => panic!("expected analyze command"),
        }
    }
}
