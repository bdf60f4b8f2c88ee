//! Product Key Normalization
//!
//! Canonicalizes raw product names into the lowercase, symbol-stripped form
//! used as the lookup index key.

use std::sync::LazyLock;

use regex::Regex;

static TRADEMARK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[™®]").unwrap());
static NON_KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s\-]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static LEADING_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:product name|product identifier)\s+").unwrap());

/// Normalize a raw product name into its lookup key.
///
/// Lowercases, drops trademark symbols, keeps only alphanumerics, whitespace
/// and hyphens, collapses whitespace runs, and strips a leading
/// "product name" / "product identifier" label. Total and pure; the result
/// may be empty.
pub fn normalize_key(input: &str) -> String {
    let text = input.to_lowercase();
    let text = TRADEMARK_RE.replace_all(&text, "");
    let text = NON_KEY_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    LEADING_LABEL_RE.replace(text.trim(), "").into_owned()
}
