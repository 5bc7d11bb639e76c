//! Error handling for the ATS checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The resume could not be opened, parsed or yielded no text.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Missing or empty skill vocabulary, unknown domain, invalid weights.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis timed out after {0} seconds")]
    Timeout(u64),
}

pub type Result<T> = std::result::Result<T, AtsError>;

impl AtsError {
    /// True when the failure happened before a report could exist because
    /// the resume itself was unusable.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            AtsError::Extraction(_) | AtsError::UnsupportedFormat(_) | AtsError::Io(_)
        )
    }
}
