//! Candidate Name Cleanup
//!
//! Strips known trailing noise from a raw product-name candidate before it is
//! normalized into a lookup key.

/// Trailing noise phrases that commonly follow a genuine product name on SDS
/// cover pages. Checked in order against the current (possibly already
/// truncated) string, so earlier truncations can hide later keywords; the
/// ordering is contractual, not incidental.
const NOISE_KEYWORDS: [&str; 18] = [
    "application",
    "recommended use",
    "product description",
    "revision date",
    "product code",
    "company",
    "prepared by",
    "authorization number",
    "product id numbers",
    "other means of identification",
    "date issued",
    "by vol",
    "rq",
    "osha",
    "twa",
    "stel",
    "percent",
    "ww identifiers",
];

/// Lowercase and trim a raw candidate, then truncate it before the first
/// occurrence of each configured noise keyword. Returns a possibly empty
/// string.
pub fn clean_product_name(raw: &str) -> String {
    let mut name = raw.trim().to_lowercase();
    for keyword in NOISE_KEYWORDS {
        if let Some(pos) = name.find(keyword) {
            name.truncate(pos);
            name = name.trim().to_string();
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_at_first_keyword() {
        assert_eq!(
            clean_product_name("Baby Pink Lavish Company Other Text"),
            "baby pink lavish"
        );
    }

    #[test]
    fn test_keywords_checked_in_list_order() {
        // "company" is hit first; "prepared by" is gone by the time it is
        // checked.
        assert_eq!(
            clean_product_name("Acme Glue Company Prepared By John"),
            "acme glue"
        );
    }

    #[test]
    fn test_matches_inside_words() {
        // Keyword matching is plain substring search, so "rq" fires inside
        // "torque". Known sharp edge of the keyword list.
        assert_eq!(clean_product_name("Torque Sealant"), "to");
    }

    #[test]
    fn test_no_keyword_passthrough() {
        assert_eq!(clean_product_name("  Baby Pink Lavish  "), "baby pink lavish");
    }

    #[test]
    fn test_leading_keyword_empties_the_name() {
        assert_eq!(clean_product_name("Revision Date 2024-01-01"), "");
    }
}
