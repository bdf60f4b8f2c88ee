//! Identification Section Isolation
//!
//! Pulls the lines of Section 1 (identification) out of raw first-page text
//! without assuming any particular document schema.

use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)identification").unwrap());
static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)section [2-9]|2\. hazard|composition|ingredients|first aid").unwrap()
});

enum ScanState {
    Seeking,
    InSection,
}

/// Extract the identification-section lines from first-page text.
///
/// Lines are trimmed and blanks discarded. Scanning starts after the first
/// line matching "identification" (the header itself is not content) and
/// stops at the first section-boundary line, which is also excluded. Returns
/// an empty Vec when no header is found.
pub fn extract_identification_section(page_text: &str) -> Vec<String> {
    let mut state = ScanState::Seeking;
    let mut lines = Vec::new();

    for line in page_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match state {
            ScanState::Seeking => {
                if HEADER_RE.is_match(line) {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                if BOUNDARY_RE.is_match(line) {
                    break;
                }
                lines.push(line.to_string());
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_bounded_by_next_section() {
        let text = "Header\nProduct Identification\nName: Foo\nSection 2: Hazards\nIngredient X";
        assert_eq!(extract_identification_section(text), vec!["Name: Foo"]);
    }

    #[test]
    fn test_no_header_yields_empty() {
        let text = "Just a cover page\nwith no marker at all";
        assert!(extract_identification_section(text).is_empty());
    }

    #[test]
    fn test_header_line_itself_is_excluded() {
        let text = "SECTION 1: IDENTIFICATION\nProduct Name: Acme Glue";
        assert_eq!(
            extract_identification_section(text),
            vec!["Product Name: Acme Glue"]
        );
    }

    #[test]
    fn test_stops_at_composition_boundary() {
        let text = "Identification\nProduct Name: Acme Glue\nComposition / Information\nWater 80%";
        assert_eq!(
            extract_identification_section(text),
            vec!["Product Name: Acme Glue"]
        );
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let text = "Identification\n\n   \nName: Foo\n\nFirst Aid Measures";
        assert_eq!(extract_identification_section(text), vec!["Name: Foo"]);
    }
}
