//! String similarity for reconciling names across datasets.
//!
//! Scores are the Sorensen–Dice coefficient over overlapping character
//! n-grams (bigrams by default). Callers compare accent-insensitively by
//! running both sides through [`strip_diacritics`] first, which
//! [`strings_are_similar`] does for them.

mod score;

pub use score::{SimilarityOptions, similarity, similarity_with};

use unicode_normalization::UnicodeNormalization;

/// Score above which two names are taken to refer to the same place.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Remove combining diacritical marks (U+0300..=U+036F) after canonical
/// decomposition, so that `"Ñuñoa"` becomes `"Nunoa"`.
pub fn strip_diacritics(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Whether two strings score strictly above `threshold`, ignoring accents
/// and case.
pub fn strings_are_similar(a: &str, b: &str, threshold: f64) -> bool {
    similarity(&strip_diacritics(a), &strip_diacritics(b)) > threshold
}

/// First candidate whose key is similar to `needle`.
///
/// Candidates are scanned in order; later candidates are never compared
/// once one matches.
pub fn find_similar<'a, T, F>(
    needle: &str,
    candidates: &'a [T],
    key: F,
    threshold: f64,
) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let needle = strip_diacritics(needle);
    let found = candidates
        .iter()
        .find(|candidate| similarity(&needle, &strip_diacritics(key(candidate))) > threshold);
    if found.is_none() {
        tracing::debug!(needle = %needle, threshold, "no similar candidate");
    }
    found
}
