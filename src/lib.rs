//! # rolecheck
//!
//! Evaluation harness for pretrained semantic role labeling (SRL) and open
//! information extraction models, checked against hand-crafted linguistic
//! test suites.
//!
//! Each suite is a JSON array of sentence records with per-token argument
//! annotations (`ARG0` marks the agent token, `ARG1` the patient token).
//! The harness sends each sentence through a model's `predict` call and
//! counts it as a pass when every annotated argument token shows up,
//! case-insensitively, inside at least one predicted verb frame
//! description.
//!
//! ## Pipeline
//!
//! ```text
//! suite JSON ──► load_suite ──► SentenceRecord
//!                                    │ input_sentence()
//!                                    ▼
//!                              Predictor::predict ──► Prediction
//!                                    │
//!                                    ▼
//!                              score_suite ──► SuiteTally
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use rolecheck::{score_suite, MockPredictor, Prediction, Predictor, SentenceRecord};
//!
//! let records = vec![SentenceRecord {
//!     tokens: vec!["Cats".into(), "chase".into(), "mice".into()],
//!     bio: vec!["ARG0".into(), "O".into(), "ARG1".into()],
//! }];
//!
//! let predictor = MockPredictor::new("canned")
//!     .with_predictions(vec![Prediction::from_descriptions(&[
//!         "[ARG0: Cats] [V: chase] [ARG1: mice]",
//!     ])]);
//!
//! let prediction = predictor.predict(&records[0].input_sentence()).unwrap();
//! let tally = score_suite(&[prediction], &records).unwrap();
//! assert_eq!((tally.passed, tally.total, tally.failed), (1, 1, 0));
//! ```
//!
//! ## Design notes
//!
//! - **Trait-based**: the evaluation loop only sees the [`Predictor`]
//!   trait, so any inference backend is substitutable.
//! - **Matching is deliberately loose**: case-insensitive substring
//!   containment against free-text descriptions, preserved exactly for
//!   compatibility with historical results.
//! - **Fail-fast**: no retry and no partial-failure isolation; the first
//!   error anywhere aborts the sweep.

#![warn(missing_docs)]

pub mod cli;
mod error;
pub mod eval;
pub mod predictors;
pub mod record;
pub mod suite;

use std::sync::atomic::{AtomicUsize, Ordering};

pub use error::{Error, Result};
pub use eval::runner::{run_sweep, run_sweep_for, EvalConfig, SuiteReport, SweepResults};
pub use eval::scorer::{score_sentence, score_suite, SuiteTally};
pub use predictors::{HttpPredictor, ModelId};
pub use record::{Prediction, SentenceRecord, VerbFrame, AGENT_TAG, PATIENT_TAG};

/// Trait for inference backends.
///
/// The single seam between the harness and a pretrained model: one
/// blocking call per sentence. Implementations may take seconds per call
/// when they run full neural inference, and the harness makes no attempt
/// to time out or cancel beyond what the backend itself enforces.
pub trait Predictor: Send + Sync {
    /// Run inference on one sentence.
    fn predict(&self, sentence: &str) -> Result<Prediction>;

    /// Display name of the backing model.
    fn name(&self) -> &str;
}

/// A mock predictor for testing.
///
/// Replays canned predictions in call order, then keeps returning the last
/// one. Useful for exercising the scorer and runner without a model server.
///
/// # Example
///
/// ```rust
/// use rolecheck::{MockPredictor, Prediction, Predictor};
///
/// let mock = MockPredictor::new("test-mock")
///     .with_predictions(vec![Prediction::from_descriptions(&["[ARG0: Cats]"])]);
///
/// let p = mock.predict("Cats chase mice.").unwrap();
/// assert_eq!(p.verbs.len(), 1);
/// ```
pub struct MockPredictor {
    name: &'static str,
    predictions: Vec<Prediction>,
    cursor: AtomicUsize,
}

impl MockPredictor {
    /// Create a new mock predictor.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            predictions: Vec::new(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Set predictions to replay, one per `predict` call.
    #[must_use]
    pub fn with_predictions(mut self, predictions: Vec<Prediction>) -> Self {
        self.predictions = predictions;
        self
    }
}

impl Predictor for MockPredictor {
    fn predict(&self, _sentence: &str) -> Result<Prediction> {
        if self.predictions.is_empty() {
            return Ok(Prediction::from_verbs(Vec::new()));
        }
        let index = self
            .cursor
            .fetch_add(1, Ordering::Relaxed)
            .min(self.predictions.len() - 1);
        Ok(self.predictions[index].clone())
    }

    fn name(&self) -> &str {
        self.name
    }
}
