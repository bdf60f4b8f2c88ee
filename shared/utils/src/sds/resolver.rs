//! Product-Name Candidate Resolution
//!
//! Two interchangeable heuristics propose the product's display name from
//! first-page text: an ordered-rule scan over the identification section, and
//! the older whole-page label scan kept as a fallback for documents whose
//! cover page never announces an identification header before the name.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::sds::section::extract_identification_section;

/// A heuristic that proposes raw product-name candidates from first-page text.
pub trait CandidateResolver: Send + Sync {
    fn resolve(&self, page_text: &str) -> Vec<String>;
    fn name(&self) -> &'static str;
}

/// Build-time resolver chain: section rules first, whole-page scan as the
/// fallback when they come up empty.
pub fn default_resolver_chain() -> Vec<Box<dyn CandidateResolver>> {
    vec![Box::new(SectionResolver), Box::new(PageScanResolver)]
}

static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^name\s*:\s*(.+)").unwrap());

/// `Name:` values that label document metadata rather than the product.
const RESERVED_NAME_VALUES: [&str; 2] = ["date issued", "generic name"];

/// Lines carrying these phrases never hold the product name.
const SKIP_PHRASES: [&str; 6] = [
    "date issued",
    "generic name",
    "other means of identification",
    "product code",
    "registration number",
    "synonyms",
];

/// Label prefixes tried in order against each section line.
const NAME_LABELS: [&str; 5] = [
    "product name",
    "product identifier",
    "product",
    "name",
    "1.1 product identifier product name",
];

/// Remainders longer than this are almost always a mis-captured header row.
const MAX_CANDIDATE_WORDS: usize = 15;

/// Section-aware policy: ordered rules over the identification-section lines,
/// yielding at most one candidate.
pub struct SectionResolver;

impl SectionResolver {
    /// Apply the rule chain to already-extracted section lines.
    pub fn resolve_lines(&self, lines: &[String]) -> Option<String> {
        // An explicit `Name:` line wins outright unless it names metadata.
        for line in lines {
            if let Some(caps) = NAME_LINE_RE.captures(line) {
                let value = caps[1].trim();
                if !RESERVED_NAME_VALUES.contains(&value.to_lowercase().as_str()) {
                    return Some(value.to_string());
                }
            }
        }

        for (i, line) in lines.iter().enumerate() {
            if contains_skip_phrase(line) {
                continue;
            }
            let Some(label) = leading_label(line) else {
                continue;
            };
            let remainder = strip_separators(&line[label.len()..]);
            if !remainder.is_empty() {
                if acceptable(remainder) {
                    return Some(remainder.to_string());
                }
                continue;
            }
            // Bare label: the name is usually on the following line.
            if let Some(next) = lines.get(i + 1).map(|l| l.trim()) {
                if !contains_skip_phrase(next) && leading_label(next).is_none() && acceptable(next)
                {
                    return Some(next.to_string());
                }
            }
        }

        None
    }
}

impl CandidateResolver for SectionResolver {
    fn resolve(&self, page_text: &str) -> Vec<String> {
        let lines = extract_identification_section(page_text);
        self.resolve_lines(&lines).into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "section"
    }
}

fn contains_skip_phrase(line: &str) -> bool {
    let lower = line.to_lowercase();
    SKIP_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

fn leading_label(line: &str) -> Option<&'static str> {
    NAME_LABELS.iter().copied().find(|label| {
        line.get(..label.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label))
    })
}

fn strip_separators(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .trim_end()
}

fn acceptable(candidate: &str) -> bool {
    !candidate.is_empty()
        && !candidate.eq_ignore_ascii_case("identifier")
        && candidate.split_whitespace().count() <= MAX_CANDIDATE_WORDS
}

static PAGE_SCAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:name|product name|product identifier)[:\s]*([^\n\r]+)").unwrap()
});

/// Generic policy: scan the whole page for labelled name lines. Note the
/// separator class includes newlines, so a bare label line captures the line
/// below it. Candidates are lowercased and de-duplicated; callers must not
/// rely on any ordering among them.
pub struct PageScanResolver;

impl CandidateResolver for PageScanResolver {
    fn resolve(&self, page_text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for caps in PAGE_SCAN_RE.captures_iter(page_text) {
            let value = caps[1].trim().to_lowercase();
            if !value.is_empty() && seen.insert(value.clone()) {
                candidates.push(value);
            }
        }
        candidates
    }

    fn name(&self) -> &'static str {
        "page-scan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_name_line_beats_label_lines() {
        let section = lines(&["Product Name Bar", "Name: Foo"]);
        assert_eq!(
            SectionResolver.resolve_lines(&section),
            Some("Foo".to_string())
        );
    }

    #[test]
    fn test_reserved_name_value_falls_through() {
        let section = lines(&["Name: Generic Name", "Product Name: Bar"]);
        assert_eq!(
            SectionResolver.resolve_lines(&section),
            Some("Bar".to_string())
        );
    }

    #[test]
    fn test_skip_phrases_are_ignored() {
        let section = lines(&["Product code: 123-X", "Product Name: Acme Glue"]);
        assert_eq!(
            SectionResolver.resolve_lines(&section),
            Some("Acme Glue".to_string())
        );
    }

    #[test]
    fn test_bare_label_takes_next_line() {
        let section = lines(&[
            "Product Identifier",
            "Baby Pink Lavish",
            "Other means of identification: N/A",
        ]);
        assert_eq!(
            SectionResolver.resolve_lines(&section),
            Some("Baby Pink Lavish".to_string())
        );
    }

    #[test]
    fn test_literal_identifier_is_rejected() {
        let section = lines(&["Product", "Identifier"]);
        assert_eq!(SectionResolver.resolve_lines(&section), None);
    }

    #[test]
    fn test_word_ceiling_rejects_header_rows() {
        let long = format!("Product Name: {}", "word ".repeat(16).trim_end());
        let section = lines(&[long.as_str()]);
        assert_eq!(SectionResolver.resolve_lines(&section), None);
    }

    #[test]
    fn test_separators_stripped_after_label() {
        let section = lines(&["Product Name - Acme Glue"]);
        assert_eq!(
            SectionResolver.resolve_lines(&section),
            Some("Acme Glue".to_string())
        );
    }

    #[test]
    fn test_section_resolver_on_full_page() {
        let text = "SECTION 1: IDENTIFICATION\nProduct Name: Acme Glue\nSection 2: Hazards";
        assert_eq!(
            SectionResolver.resolve(text),
            vec!["Acme Glue".to_string()]
        );
    }

    #[test]
    fn test_page_scan_captures_following_line() {
        // The separator class eats the newline after a bare label.
        let text = "Product Identifier\nBaby Pink Lavish\nOther means of identification: N/A";
        let candidates = PageScanResolver.resolve(text);
        assert!(candidates.contains(&"baby pink lavish".to_string()));
    }

    #[test]
    fn test_page_scan_deduplicates() {
        let text = "Name: Foo\nTrade name: foo";
        assert_eq!(PageScanResolver.resolve(text), vec!["foo".to_string()]);
    }
}
