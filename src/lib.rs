//! ATS checker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod nlp;
pub mod processing;
pub mod output;

pub use error::{Result, AtsError};
pub use config::Config;
pub use output::report::AnalysisReport;
pub use processing::AtsChecker;
