//! Invariant tests for the scoring rules.
//!
//! These pin down the exact matching semantics the suites depend on:
//! default-false argument flags, first-occurrence tag lookup,
//! case-insensitive substring containment, and the two-decimal
//! half-to-even failure percentage.

use rolecheck::{score_sentence, score_suite, Prediction, SentenceRecord, SuiteTally};

fn record(tokens: &[&str], bio: &[&str]) -> SentenceRecord {
    SentenceRecord {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
        bio: bio.iter().map(|t| t.to_string()).collect(),
    }
}

// =============================================================================
// Matching Rule
// =============================================================================

#[test]
fn canonical_pass() {
    let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]);
    let p = Prediction::from_descriptions(&["[ARG0: Cats] chase [ARG1: mice]"]);
    assert!(score_sentence(&r, &p).unwrap());
}

#[test]
fn token_matches_lowercased_description() {
    let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]);
    let p = Prediction::from_descriptions(&["cats chase mice"]);
    assert!(score_sentence(&r, &p).unwrap());
}

#[test]
fn no_word_boundary_is_enforced() {
    // Token "cat" is contained in "cats": counts as located.
    let r = record(&["cat", "chases", "mice"], &["ARG0", "O", "ARG1"]);
    let p = Prediction::from_descriptions(&["many cats chase some mice"]);
    assert!(score_sentence(&r, &p).unwrap());
}

#[test]
fn record_without_annotations_counts_as_failure() {
    // Both argument flags stay false when no tag is present, so the
    // sentence can never pass, however good the prediction looks.
    let r = record(&["Cats", "chase", "mice"], &["O", "O", "O"]);
    let p = Prediction::from_descriptions(&["[ARG0: Cats] chase [ARG1: mice]"]);
    assert!(!score_sentence(&r, &p).unwrap());
}

#[test]
fn single_annotated_argument_is_not_enough() {
    // ARG1 is absent, so its flag stays false and the sentence fails even
    // though ARG0 is located.
    let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "O"]);
    let p = Prediction::from_descriptions(&["[ARG0: Cats] chase mice"]);
    assert!(!score_sentence(&r, &p).unwrap());
}

#[test]
fn empty_prediction_fails_annotated_record() {
    let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]);
    let p = Prediction::from_verbs(Vec::new());
    assert!(!score_sentence(&r, &p).unwrap());
}

// =============================================================================
// Tally Arithmetic
// =============================================================================

#[test]
fn two_passing_one_failing_yields_2_3_1() {
    let records = vec![
        record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]),
        record(&["dog", "bit", "man"], &["ARG0", "O", "ARG1"]),
        record(&["birds", "fly", "south"], &["ARG0", "O", "ARG1"]),
    ];
    let predictions = vec![
        Prediction::from_descriptions(&["[ARG0: Cats] chase [ARG1: mice]"]),
        Prediction::from_descriptions(&["the dog bit the man"]),
        Prediction::from_descriptions(&["birds fly"]),
    ];

    let tally = score_suite(&predictions, &records).unwrap();
    assert_eq!((tally.passed, tally.total, tally.failed), (2, 3, 1));
}

#[test]
fn failure_percentage_examples() {
    let one_of_three = SuiteTally {
        passed: 2,
        total: 3,
        failed: 1,
    };
    assert_eq!(one_of_three.failure_percentage(), 33.33);

    let all_pass = SuiteTally {
        passed: 7,
        total: 7,
        failed: 0,
    };
    assert_eq!(all_pass.failure_percentage(), 0.0);

    let all_fail = SuiteTally {
        passed: 0,
        total: 4,
        failed: 4,
    };
    assert_eq!(all_fail.failure_percentage(), 100.0);
}

#[test]
fn failure_percentage_tie_rounds_to_even_neighbor() {
    // 1/32 = 3.125%: the third decimal is an exact 5, and the even
    // neighbor is 3.12. 3/32 = 9.375% rounds the other way, to 9.38.
    let down = SuiteTally {
        passed: 31,
        total: 32,
        failed: 1,
    };
    assert_eq!(down.failure_percentage(), 3.12);

    let up = SuiteTally {
        passed: 29,
        total: 32,
        failed: 3,
    };
    assert_eq!(up.failure_percentage(), 9.38);
}

// =============================================================================
// Property Tests
// =============================================================================

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn components_always_sum_to_total(outcomes in prop::collection::vec(any::<bool>(), 0..60)) {
            let records: Vec<SentenceRecord> = outcomes
                .iter()
                .map(|_| record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]))
                .collect();
            let predictions: Vec<Prediction> = outcomes
                .iter()
                .map(|&pass| {
                    if pass {
                        Prediction::from_descriptions(&["cats chase mice"])
                    } else {
                        Prediction::from_descriptions(&["nothing relevant"])
                    }
                })
                .collect();

            let tally = score_suite(&predictions, &records).unwrap();
            prop_assert_eq!(tally.passed + tally.failed, tally.total);
            prop_assert_eq!(tally.passed, outcomes.iter().filter(|&&p| p).count());
        }

        #[test]
        fn percentage_is_bounded_and_two_decimal(failed in 0usize..500, extra in 0usize..500) {
            let total = failed + extra;
            let tally = SuiteTally { passed: extra, total, failed };
            let pct = tally.failure_percentage();

            prop_assert!((0.0..=100.0).contains(&pct));
            // Rounded to two decimals: scaling by 100 lands on an integer.
            prop_assert!(((pct * 100.0).round() - pct * 100.0).abs() < 1e-6);
        }
    }
}
