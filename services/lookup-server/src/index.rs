//! Lookup Index
//!
//! Normalized-key to filename associations behind a single interface, with an
//! in-memory exact-match variant and a Postgres-backed substring-match
//! variant.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use sdslocator_database::ProductRepository;

/// In-memory variant: built once at startup, read-only while serving.
/// Registering a key that already exists overwrites it (last write wins).
#[derive(Debug, Default)]
pub struct MemoryIndex {
    entries: HashMap<String, String>,
}

impl MemoryIndex {
    pub fn insert(&mut self, product_key: String, filename: String) {
        self.entries.insert(product_key, filename);
    }

    pub fn lookup(&self, product_key: &str) -> Option<&str> {
        self.entries.get(product_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Persisted variant over the `products` table. Registration is
/// insert-if-absent (first write wins); lookup is substring containment.
pub struct PostgresIndex {
    repository: ProductRepository,
}

impl PostgresIndex {
    pub fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }

    pub async fn lookup(&self, product_key: &str) -> Result<Option<String>> {
        Ok(self
            .repository
            .find_by_key_substring(product_key)
            .await?
            .map(|entry| entry.filename))
    }

    /// Filenames already represented in the store. Falls back to an empty set
    /// when the backend cannot be reached, so every document is reprocessed
    /// by the build pass.
    pub async fn known_filenames(&self) -> HashSet<String> {
        match self.repository.list_filenames().await {
            Ok(files) => files.into_iter().collect(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Could not list indexed filenames; reprocessing all documents"
                );
                HashSet::new()
            }
        }
    }

    pub async fn register(&self, product_key: &str, filename: &str) -> Result<bool> {
        self.repository
            .insert_if_absent(product_key, filename)
            .await
    }
}

/// The lookup-index capability the query service is written against.
pub enum ProductIndex {
    Memory(MemoryIndex),
    Postgres(PostgresIndex),
}

impl ProductIndex {
    /// Resolve a normalized key to a filename. Exact match in memory;
    /// substring containment (undefined tie-break) against the persisted
    /// store.
    pub async fn lookup(&self, product_key: &str) -> Result<Option<String>> {
        match self {
            Self::Memory(index) => Ok(index.lookup(product_key).map(str::to_string)),
            Self::Postgres(index) => index.lookup(product_key).await,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_index_last_write_wins() {
        let mut index = MemoryIndex::default();
        index.insert("acme glue".to_string(), "first.pdf".to_string());
        index.insert("acme glue".to_string(), "second.pdf".to_string());

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("acme glue"), Some("second.pdf"));
    }

    #[tokio::test]
    async fn test_memory_lookup_is_exact_match() {
        let mut index = MemoryIndex::default();
        index.insert("baby pink lavish".to_string(), "lavish.pdf".to_string());
        let index = ProductIndex::Memory(index);

        assert_eq!(
            index.lookup("baby pink lavish").await.unwrap(),
            Some("lavish.pdf".to_string())
        );
        // A substring of a stored key does not match in this variant.
        assert_eq!(index.lookup("pink lavish").await.unwrap(), None);
    }
}
