//! Pass/fail scoring of predictions against gold argument annotations.
//!
//! A sentence passes when every annotated argument token is *located* in
//! the model output: the token must appear, case-insensitively, as a
//! substring of at least one predicted verb frame description. One match
//! anywhere is enough; there is no verb-to-argument alignment, no word
//! boundary check, no stemming, and no partial credit. The looseness is
//! intentional: downstream comparisons depend on this exact matching rule,
//! so it must not be quietly tightened (a gold token `"cat"` matching a
//! description containing `"cats"` counts).
//!
//! Each argument flag starts out `false` and is only raised by a matching
//! description. A record with neither `ARG0` nor `ARG1` annotated therefore
//! never passes. That is the established tally semantics, and suites rely
//! on it; [`validate_suite`](crate::suite::validate_suite) flags such
//! records so authors can fix them at the source.

use serde::{Deserialize, Serialize};

use crate::record::{Prediction, SentenceRecord, AGENT_TAG, PATIENT_TAG};
use crate::{Error, Result};

/// Outcome counters for one (model, suite) run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteTally {
    /// Sentences with every annotated argument located.
    pub passed: usize,
    /// Sentences evaluated.
    pub total: usize,
    /// Sentences failing on at least one argument.
    pub failed: usize,
}

impl SuiteTally {
    /// Failure rate as a percentage, rounded to two decimal places.
    ///
    /// Ties round half-to-even, so `9.375` becomes `9.38` and `3.125`
    /// becomes `3.12`. An empty suite reports `0.0`.
    #[must_use]
    pub fn failure_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round2(self.failed as f64 / self.total as f64 * 100.0)
    }
}

/// Round to two decimal places, ties to even.
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor == 0.5 {
        if floor.rem_euclid(2.0) == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        scaled.round()
    };
    rounded / 100.0
}

/// Check whether the argument tagged `tag` is located in the prediction.
///
/// Returns `false` when the tag is absent from the record. Errors when the
/// tag is declared but has no aligned token.
fn argument_located(record: &SentenceRecord, prediction: &Prediction, tag: &str) -> Result<bool> {
    let Some(token) = record.argument_token(tag)? else {
        return Ok(false);
    };
    let needle = token.to_lowercase();
    Ok(prediction
        .verbs
        .iter()
        .any(|verb| verb.description.to_lowercase().contains(&needle)))
}

/// Score a single sentence: both annotated arguments must be located.
pub fn score_sentence(record: &SentenceRecord, prediction: &Prediction) -> Result<bool> {
    let agent_located = argument_located(record, prediction, AGENT_TAG)?;
    let patient_located = argument_located(record, prediction, PATIENT_TAG)?;
    Ok(agent_located && patient_located)
}

/// Score a suite: predictions and records are aligned by index.
pub fn score_suite(
    predictions: &[Prediction],
    records: &[SentenceRecord],
) -> Result<SuiteTally> {
    if predictions.len() != records.len() {
        return Err(Error::annotation(format!(
            "prediction count ({}) != record count ({})",
            predictions.len(),
            records.len()
        )));
    }

    let total = predictions.len();
    let mut passed = 0;
    let mut failed = 0;

    for (record, prediction) in records.iter().zip(predictions) {
        if score_sentence(record, prediction)? {
            passed += 1;
        } else {
            failed += 1;
        }
    }

    Ok(SuiteTally {
        passed,
        total,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tokens: &[&str], bio: &[&str]) -> SentenceRecord {
        SentenceRecord {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            bio: bio.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn both_arguments_located_passes() {
        let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]);
        let p = Prediction::from_descriptions(&["[ARG0: Cats] chase [ARG1: mice]"]);
        assert!(score_sentence(&r, &p).unwrap());
    }

    #[test]
    fn match_is_case_insensitive() {
        let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]);
        let p = Prediction::from_descriptions(&["[ARG0: cats] chase [ARG1: MICE]"]);
        assert!(score_sentence(&r, &p).unwrap());
    }

    #[test]
    fn substring_containment_is_sufficient() {
        // "cat" inside "cats" counts; no word boundary is enforced.
        let r = record(&["cat", "chases", "mice"], &["ARG0", "O", "ARG1"]);
        let p = Prediction::from_descriptions(&["cats chase mice"]);
        assert!(score_sentence(&r, &p).unwrap());
    }

    #[test]
    fn one_missing_argument_fails() {
        let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]);
        let p = Prediction::from_descriptions(&["[ARG0: Cats] chase [ARG1: birds]"]);
        assert!(!score_sentence(&r, &p).unwrap());
    }

    #[test]
    fn unannotated_record_always_fails() {
        let r = record(&["Cats", "chase", "mice"], &["O", "O", "O"]);
        let p = Prediction::from_descriptions(&["Cats chase mice"]);
        assert!(!score_sentence(&r, &p).unwrap());
    }

    #[test]
    fn match_may_span_multiple_verb_frames() {
        let r = record(&["Cats", "chase", "mice"], &["ARG0", "O", "ARG1"]);
        let p = Prediction::from_descriptions(&["frame about Cats", "frame about mice"]);
        assert!(score_sentence(&r, &p).unwrap());
    }

    #[test]
    fn duplicate_tag_scores_first_occurrence_only() {
        let r = record(&["alpha", "beta", "gamma"], &["ARG0", "ARG0", "ARG1"]);
        let hit_first = Prediction::from_descriptions(&["alpha and gamma"]);
        let hit_second = Prediction::from_descriptions(&["beta and gamma"]);
        assert!(score_sentence(&r, &hit_first).unwrap());
        assert!(!score_sentence(&r, &hit_second).unwrap());
    }

    #[test]
    fn misaligned_annotation_is_fatal() {
        let r = record(&["only"], &["O", "O", "ARG0"]);
        let p = Prediction::from_descriptions(&["only"]);
        assert!(score_sentence(&r, &p).is_err());
    }

    #[test]
    fn suite_length_mismatch_errors() {
        let records = vec![record(&["a"], &["ARG0"])];
        assert!(score_suite(&[], &records).is_err());
    }

    #[test]
    fn failure_percentage_rounds_to_two_decimals() {
        let tally = SuiteTally {
            passed: 2,
            total: 3,
            failed: 1,
        };
        assert_eq!(tally.failure_percentage(), 33.33);
    }

    #[test]
    fn failure_percentage_ties_round_half_to_even() {
        // 1/32 = 3.125% -> even neighbor 3.12; 3/32 = 9.375% -> even neighbor 9.38.
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

    #[test]
    fn failure_percentage_exact_values_pass_through() {
        let tally = SuiteTally {
            passed: 15,
            total: 16,
            failed: 1,
        };
        assert_eq!(tally.failure_percentage(), 6.25);
    }

    #[test]
    fn failure_percentage_empty_suite_is_zero() {
        assert_eq!(SuiteTally::default().failure_percentage(), 0.0);
    }
}
