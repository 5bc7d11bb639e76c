//! ATS checker: resume screening against a job description

use anyhow::{Context, Result};
use ats_checker::cli::{self, Cli, Commands, ConfigAction};
use ats_checker::config::Config;
use ats_checker::input::InputManager;
use ats_checker::nlp::{NlpModel, RuleBasedModel};
use ats_checker::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use ats_checker::processing::analyzer::{analyze_with_timeout, AtsChecker};
use ats_checker::processing::vocabulary::SkillVocabulary;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("{:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            domain,
            vocabulary,
            output,
            save,
            timeout_secs,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(anyhow::Error::msg)
                .context("Resume file")?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };

            // Configuration problems surface before any document is read
            let vocabulary = match &vocabulary {
                Some(path) => SkillVocabulary::from_file(path)?,
                None => config.vocabulary_for(domain.as_deref())?,
            };
            let model: Arc<dyn NlpModel> = Arc::new(RuleBasedModel::with_entities(config.nlp.entities.clone())?);
            let checker = Arc::new(AtsChecker::new(model, &vocabulary, &config)?);

            let job_description = match (job, job_text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, &["txt", "md"])
                        .map_err(anyhow::Error::msg)
                        .context("Job description file")?;
                    InputManager::new()
                        .extract_raw(&path)
                        .with_context(|| format!("Failed to read job description {}", path.display()))?
                }
                (None, Some(text)) => text,
                (None, None) => anyhow::bail!("Provide --job or --job-text"),
            };

            info!("Resume: {} | Domain: {}", resume.display(), checker.domain());

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
            spinner.set_message("Analyzing resume...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = analyze_with_timeout(
                checker,
                PathBuf::from(&resume),
                job_description,
                Duration::from_secs(timeout_secs),
            )
            .await;
            spinner.finish_and_clear();

            let report = result.with_context(|| format!("No report for {}", resume.display()))?;

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Domains => {
            println!("{}", "Available skill domains".bold());
            for vocabulary in config.available_vocabularies()? {
                let marker = if vocabulary.name == config.vocabulary.default_domain { "*" } else { " " };
                println!(
                    "{} {} ({} skills, v{}) {}",
                    marker,
                    vocabulary.name,
                    vocabulary.len(),
                    vocabulary.version,
                    vocabulary.description
                );
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}\n", Config::config_path().display());
                println!("{}", toml::to_string_pretty(&config)?);
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults at {}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
