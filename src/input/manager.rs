//! Input manager for handling different file types

use crate::error::{AtsError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::path::Path;

/// Routes a document source to the extractor for its format and rejects
/// sources that produce no text.
#[derive(Debug, Default, Clone)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract a resume, rejecting documents with no text.
    pub fn extract_text(&self, path: &Path) -> Result<String> {
        let text = self.extract_raw(path)?;
        Self::ensure_not_empty(text, &path.display().to_string())
    }

    /// Extract a document as-is; an empty job description is allowed.
    pub fn extract_raw(&self, path: &Path) -> Result<String> {
        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path)?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path)?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path)?
            }
            FileType::Unknown => {
                return Err(AtsError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )))
            }
        };

        Ok(text)
    }

    /// Extract text from an in-memory document of a known format.
    pub fn extract_bytes(&self, bytes: &[u8], file_type: FileType) -> Result<String> {
        let text = match file_type {
            FileType::Pdf => PdfExtractor.extract_bytes(bytes)?,
            FileType::Text => PlainTextExtractor.extract_bytes(bytes)?,
            FileType::Markdown => MarkdownExtractor.extract_bytes(bytes)?,
            FileType::Unknown => {
                return Err(AtsError::UnsupportedFormat(
                    "in-memory document with unknown format".to_string(),
                ))
            }
        };

        Self::ensure_not_empty(text, "in-memory document")
    }

    fn ensure_not_empty(text: String, source: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(AtsError::Extraction(format!(
                "No extractable text in {}",
                source
            )));
        }
        debug!("Extracted {} characters from {}", text.chars().count(), source);
        Ok(text)
    }
}
