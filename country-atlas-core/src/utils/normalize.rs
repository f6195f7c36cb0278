//! Accent- and case-insensitive text normalization.
//!
//! The single collation authority for the directory: search matching and
//! list ordering both go through [`normalize`].

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text for matching: lowercase, NFD-decompose, drop combining marks.
///
/// `normalize("Côte d'Ivoire")` and `normalize("cote d'ivoire")` yield the
/// same string. Idempotent.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
