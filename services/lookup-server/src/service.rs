//! Lookup Service
//!
//! The query path: clean the submitted name, normalize it into a key, and ask
//! the index.

use std::sync::Arc;

use sdslocator_utils::sds::{clean_product_name, normalize_key};
use sdslocator_utils::{LocatorError, LocatorResult};

use crate::index::ProductIndex;

#[derive(Clone)]
pub struct LookupService {
    index: Arc<ProductIndex>,
}

impl LookupService {
    pub fn new(index: ProductIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    /// Map a user-supplied product name to the filename of the document it
    /// was extracted from.
    pub async fn find(&self, product: &str) -> LocatorResult<String> {
        let key = normalize_key(&clean_product_name(product));
        tracing::debug!(key = %key, "Looking up product");

        // An empty key would substring-match every stored key in the
        // persisted variant.
        if key.is_empty() {
            return Err(LocatorError::not_found(product));
        }

        self.index
            .lookup(&key)
            .await
            .map_err(|e| LocatorError::database(e.to_string()))?
            .ok_or_else(|| LocatorError::not_found(product))
    }

    pub fn backend_name(&self) -> &'static str {
        self.index.backend_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MemoryIndex;

    #[tokio::test]
    async fn test_find_normalizes_the_query() {
        let mut index = MemoryIndex::default();
        index.insert("baby pink lavish".to_string(), "lavish.pdf".to_string());
        let service = LookupService::new(ProductIndex::Memory(index));

        let found = service.find("  Baby Pink Lavish™ ").await.unwrap();
        assert_eq!(found, "lavish.pdf");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let service = LookupService::new(ProductIndex::Memory(MemoryIndex::default()));

        let error = service.find("nonexistent product").await.unwrap_err();
        assert_eq!(error.http_status_code(), 404);
    }

    #[tokio::test]
    async fn test_empty_key_never_reaches_the_index() {
        let service = LookupService::new(ProductIndex::Memory(MemoryIndex::default()));

        let error = service.find("™ !! ©").await.unwrap_err();
        assert_eq!(error.http_status_code(), 404);
    }
}
