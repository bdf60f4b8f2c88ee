//! PDF Processor
//!
//! First-page text extraction for SDS documents.

use std::path::Path;

use anyhow::{Context, Result};

pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the first page's text from a PDF on disk. Pages beyond the
    /// first are never examined.
    pub fn extract_first_page(&self, path: &Path) -> Result<String> {
        let text = pdf_extract::extract_text(path)
            .with_context(|| format!("Failed to extract text from {}", path.display()))?;

        // pdf-extract separates pages with form feeds
        let first_page = text.split('\u{c}').next().unwrap_or_default();
        Ok(first_page.to_string())
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}
