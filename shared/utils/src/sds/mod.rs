//! SDS First-Page Heuristics
//!
//! Extraction pipeline that turns raw first-page text of a safety data sheet
//! into a normalized product lookup key: identification-section isolation,
//! candidate resolution, noise cleanup, and key normalization.

pub mod cleaner;
pub mod normalize;
pub mod resolver;
pub mod section;

pub use cleaner::clean_product_name;
pub use normalize::normalize_key;
pub use resolver::{default_resolver_chain, CandidateResolver, PageScanResolver, SectionResolver};
pub use section::extract_identification_section;
