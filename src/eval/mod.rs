//! Evaluation: scoring and the sweep orchestrator.
//!
//! [`scorer`] holds the pass/fail matching rule and tally arithmetic;
//! [`runner`] drives the load → predict → score → report → persist loop
//! across model variants and suites.

pub mod runner;
pub mod scorer;

pub use runner::{
    generate_predictions, run_model, run_sweep, run_sweep_for, EvalConfig, SuiteReport,
    SweepResults,
};
pub use scorer::{score_sentence, score_suite, SuiteTally};
