//! Index Builder
//!
//! Startup pass that scans the document directory, extracts product-name
//! candidates from each PDF's first page, and registers normalized keys.
//! Runs to completion before the server answers its first query.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use sdslocator_utils::sds::{
    clean_product_name, default_resolver_chain, normalize_key, CandidateResolver,
};

use crate::index::{MemoryIndex, PostgresIndex};
use crate::pdf_processor::PdfProcessor;

pub struct IndexBuilder {
    pdf_processor: PdfProcessor,
    resolvers: Vec<Box<dyn CandidateResolver>>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            pdf_processor: PdfProcessor::new(),
            resolvers: default_resolver_chain(),
        }
    }

    /// Build the in-memory index from every PDF in the directory.
    pub fn build_memory(&self, pdf_dir: &Path) -> Result<MemoryIndex> {
        let mut index = MemoryIndex::default();
        for filename in self.pdf_filenames(pdf_dir)? {
            for key in self.keys_for_document(pdf_dir, &filename) {
                tracing::debug!(key = %key, file = %filename, "Adding index entry");
                index.insert(key, filename.clone());
            }
        }
        tracing::info!(entries = index.len(), "In-memory index built");
        Ok(index)
    }

    /// Synchronize the persisted index. Documents already represented are
    /// skipped and colliding keys are dropped by the store, so this pass is
    /// safe to repeat on every startup.
    pub async fn sync_postgres(&self, pdf_dir: &Path, index: &PostgresIndex) -> Result<()> {
        let known = index.known_filenames().await;
        let mut registered = 0usize;

        for filename in self.pdf_filenames(pdf_dir)? {
            if known.contains(&filename) {
                continue;
            }
            for key in self.keys_for_document(pdf_dir, &filename) {
                match index.register(&key, &filename).await {
                    Ok(true) => registered += 1,
                    Ok(false) => {
                        tracing::debug!(key = %key, file = %filename, "Key already indexed; entry dropped");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, key = %key, file = %filename, "Failed to register index entry");
                    }
                }
            }
        }

        tracing::info!(registered, "Persisted index synchronized");
        Ok(())
    }

    /// Normalized keys contributed by one document. Extraction failures are
    /// contained here: the document logs a warning and contributes nothing.
    fn keys_for_document(&self, pdf_dir: &Path, filename: &str) -> Vec<String> {
        let path = pdf_dir.join(filename);
        let page_text = match self.pdf_processor.extract_first_page(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, file = %filename, "Skipping unreadable document");
                return Vec::new();
            }
        };

        let keys = self.keys_from_page_text(&page_text);
        if keys.is_empty() {
            tracing::info!(file = %filename, "No product-name candidates found");
        }
        keys
    }

    /// Resolver chain, then cleanup and normalization. The first resolver
    /// whose candidates survive normalization wins.
    fn keys_from_page_text(&self, page_text: &str) -> Vec<String> {
        for resolver in &self.resolvers {
            let candidates = resolver.resolve(page_text);
            if candidates.is_empty() {
                continue;
            }

            let mut seen = HashSet::new();
            let keys: Vec<String> = candidates
                .iter()
                .map(|raw| normalize_key(&clean_product_name(raw)))
                .filter(|key| !key.is_empty() && seen.insert(key.clone()))
                .collect();

            if !keys.is_empty() {
                tracing::debug!(resolver = resolver.name(), count = keys.len(), "Candidates resolved");
                return keys;
            }
        }
        Vec::new()
    }

    fn pdf_filenames(&self, pdf_dir: &Path) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(pdf_dir)
            .with_context(|| format!("Failed to read document directory {}", pdf_dir.display()))?;

        let mut filenames = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.to_lowercase().ends_with(".pdf") && entry.path().is_file() {
                filenames.push(name);
            }
        }
        filenames.sort();
        Ok(filenames)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
