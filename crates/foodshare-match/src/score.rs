//! Sorensen–Dice coefficient over overlapping character n-grams.

use std::collections::HashMap;

/// Tuning of [`similarity_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityOptions {
    /// Length of the compared substrings, in characters.
    pub substring_len: usize,
    /// Compare without lowercasing first.
    pub case_sensitive: bool,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            substring_len: 2,
            case_sensitive: false,
        }
    }
}

/// Case-insensitive bigram similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_with(a, b, SimilarityOptions::default())
}

/// Similarity with explicit options.
///
/// Every substring of `a` is counted; each substring of `b` matches while
/// its remaining count in `a` is positive. Strings shorter than the
/// substring length score zero.
pub fn similarity_with(a: &str, b: &str, options: SimilarityOptions) -> f64 {
    let n = options.substring_len.max(1);
    let (a, b): (Vec<char>, Vec<char>) = if options.case_sensitive {
        (a.chars().collect(), b.chars().collect())
    } else {
        (a.to_lowercase().chars().collect(), b.to_lowercase().chars().collect())
    };

    if a.len() < n || b.len() < n {
        return 0.0;
    }

    let mut counts: HashMap<&[char], usize> = HashMap::new();
    for window in a.windows(n) {
        *counts.entry(window).or_default() += 1;
    }

    let mut matches = 0usize;
    for window in b.windows(n) {
        if let Some(count) = counts.get_mut(window)
            && *count > 0
        {
            *count -= 1;
            matches += 1;
        }
    }

    let total = (a.len() - (n - 1)) + (b.len() - (n - 1));
    (2 * matches) as f64 / total as f64
}
