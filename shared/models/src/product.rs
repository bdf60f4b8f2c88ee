use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the lookup index: a normalized product key mapped to the
/// document it was extracted from. `product_key` is unique in the persisted
/// store; two raw names that normalize identically are indistinguishable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductEntry {
    pub id: Uuid,
    pub product_key: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

impl ProductEntry {
    pub fn new(product_key: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_key: product_key.into(),
            filename: filename.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_entry_creation() {
        let entry = ProductEntry::new("baby pink lavish", "lavish.pdf");
        assert!(!entry.id.to_string().is_empty());
        assert_eq!(entry.product_key, "baby pink lavish");
        assert_eq!(entry.filename, "lavish.pdf");
    }
}
