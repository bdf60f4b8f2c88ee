//! Product Repository
//!
//! Lookup-index rows over the `products` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use sdslocator_models::ProductEntry;

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a key for a document. First write wins: a key that already
    /// exists is left untouched and `false` is returned. That a colliding
    /// document is silently dropped rather than re-associated is the intended
    /// conflict policy.
    pub async fn insert_if_absent(&self, product_key: &str, filename: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (product_key, filename)
            VALUES ($1, $2)
            ON CONFLICT (product_key) DO NOTHING
            "#,
        )
        .bind(product_key)
        .bind(filename)
        .execute(&self.pool)
        .await
        .context("Failed to insert product entry")?;

        Ok(result.rows_affected() > 0)
    }

    /// Exact-match lookup by normalized key.
    pub async fn find_by_key(&self, product_key: &str) -> Result<Option<ProductEntry>> {
        let entry: Option<ProductEntry> = sqlx::query_as(
            r#"
            SELECT id, product_key, filename, created_at
            FROM products
            WHERE product_key = $1
            "#,
        )
        .bind(product_key)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch product by key")?;

        Ok(entry)
    }

    /// Substring-containment lookup: the queried key must appear anywhere
    /// inside a stored key. Multiple stored keys can match; which row is
    /// returned is unspecified (no ORDER BY). Known limitation, kept as-is.
    pub async fn find_by_key_substring(&self, product_key: &str) -> Result<Option<ProductEntry>> {
        let entry: Option<ProductEntry> = sqlx::query_as(
            r#"
            SELECT id, product_key, filename, created_at
            FROM products
            WHERE product_key LIKE '%' || $1 || '%'
            LIMIT 1
            "#,
        )
        .bind(product_key)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch product by key substring")?;

        Ok(entry)
    }

    /// Filenames already represented in the index, for the idempotent
    /// build pass.
    pub async fn list_filenames(&self) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT DISTINCT filename FROM products")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list indexed filenames")?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Number of index entries.
    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count products")?;

        Ok(row.0)
    }
}
