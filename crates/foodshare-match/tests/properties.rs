//! Property tests for the bigram similarity score.

use foodshare_match::{similarity, strip_diacritics, strings_are_similar};
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_is_bounded(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    }

    #[test]
    fn score_is_symmetric(a in "[a-zñáéíóú ]{0,20}", b in "[a-zñáéíóú ]{0,20}") {
        prop_assert!((similarity(&a, &b) - similarity(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn identity_scores_one(s in "[a-zA-Z0-9 ]{2,30}") {
        prop_assert_eq!(similarity(&s, &s), 1.0);
    }

    #[test]
    fn short_strings_score_zero(a in "[a-zA-Z]{0,1}", b in "[a-zA-Z ]{0,30}") {
        prop_assert_eq!(similarity(&a, &b), 0.0);
        prop_assert_eq!(similarity(&b, &a), 0.0);
    }

    #[test]
    fn very_different_lengths_stay_bounded(short in "[a-z]{2,4}", long in "[a-z]{40,80}") {
        let score = similarity(&short, &long);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn stripping_is_idempotent(s in "[a-zA-Zñáéíóúü ]{0,20}") {
        let once = strip_diacritics(&s);
        prop_assert_eq!(strip_diacritics(&once), once.clone());
    }

    #[test]
    fn accented_copy_is_similar(s in "[a-z]{4,20}") {
        let accented: String = s.chars().map(|c| match c {
            'a' => 'á',
            'e' => 'é',
            'n' => 'ñ',
            other => other,
        }).collect();
        prop_assert!(strings_are_similar(&s, &accented, 0.8));
    }
}
