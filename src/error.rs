//! Error types for rolecheck.

use thiserror::Error;

/// Result type for rolecheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rolecheck operations.
///
/// Every variant is fatal to the evaluation sweep: there is no per-sentence
/// or per-suite isolation, so the first error aborts the run and any suites
/// not yet evaluated produce no output.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Model initialization failed (server unreachable, archive not loaded).
    #[error("Model initialization failed: {0}")]
    ModelInit(String),

    /// Model inference failed.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Test-suite loading/parsing error.
    #[error("Suite error: {0}")]
    Suite(String),

    /// Gold annotation inconsistency (a tag with no aligned token).
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Prediction dump could not be written.
    #[error("Output error: {0}")]
    Output(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a model initialization error.
    pub fn model_init(msg: impl Into<String>) -> Self {
        Error::ModelInit(msg.into())
    }

    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Error::Inference(msg.into())
    }

    /// Create a suite error.
    pub fn suite(msg: impl Into<String>) -> Self {
        Error::Suite(msg.into())
    }

    /// Create an annotation error.
    pub fn annotation(msg: impl Into<String>) -> Self {
        Error::Annotation(msg.into())
    }

    /// Create an output error.
    pub fn output(msg: impl Into<String>) -> Self {
        Error::Output(msg.into())
    }
}
