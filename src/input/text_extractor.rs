//! Text extraction from various file formats

use crate::error::{AtsError, Result};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub trait TextExtractor {
    /// Extract text from an in-memory document.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Read the file and extract its text. The file handle lives only for
    /// the duration of the read.
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = read_file(path)?;
        self.extract_bytes(&bytes).map_err(|e| match e {
            AtsError::Extraction(msg) => {
                AtsError::Extraction(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut file = File::open(path).map_err(|e| {
        AtsError::Extraction(format!("Failed to open '{}': {}", path.display(), e))
    })?;
    file.read_to_end(&mut bytes).map_err(|e| {
        AtsError::Extraction(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    Ok(bytes)
}

fn decode_utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| AtsError::Extraction(format!("Unsupported text encoding: {}", e)))
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed documents instead of erroring
        let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(AtsError::Extraction(format!(
                "Failed to extract text from PDF: {}",
                e
            ))),
            Err(_) => Err(AtsError::Extraction(
                "PDF parser aborted on a malformed document".to_string(),
            )),
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        decode_utf8(bytes)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let markdown_content = decode_utf8(bytes)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let clean_text = tag_regex.replace_all(&text, "").replace("&amp;", "&");

        clean_text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
