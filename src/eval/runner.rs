//! The evaluation sweep: load, predict, score, report, persist.
//!
//! Execution is single-threaded and fully sequential. For each model
//! variant, a predictor is constructed once (the expensive step), then each
//! suite is loaded, run sentence-by-sentence through the predictor, scored,
//! summarized on the console, and its raw prediction list dumped to
//! `{output_dir}/{model_index}_{suite_file_name}`. There is no retry logic
//! and no partial-failure isolation: the first error aborts the sweep.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::eval::scorer::{score_suite, SuiteTally};
use crate::predictors::http::HttpPredictor;
use crate::predictors::registry::ModelId;
use crate::record::{Prediction, SentenceRecord};
use crate::suite::{load_suite, SUITE_FILES};
use crate::{Error, Predictor, Result};

/// Configuration for an evaluation sweep.
///
/// Everything the orchestrator consumes arrives here explicitly: which
/// suite files to run, where to find them, where prediction dumps go, and
/// which inference server to talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Suite file names, evaluated in order.
    pub suite_files: Vec<String>,
    /// Directory containing the suite files.
    pub suite_dir: PathBuf,
    /// Directory for raw prediction dumps (created if absent).
    pub output_dir: PathBuf,
    /// Base URL of the inference server.
    pub endpoint: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            suite_files: SUITE_FILES.iter().map(|s| s.to_string()).collect(),
            suite_dir: PathBuf::from("."),
            output_dir: PathBuf::from("outputs"),
            endpoint: "http://127.0.0.1:8000".to_string(),
        }
    }
}

/// Scored summary for one (model, suite) run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Model variant evaluated.
    pub model: ModelId,
    /// Suite file name.
    pub suite: String,
    /// Sentences with every annotated argument located.
    pub passed: usize,
    /// Sentences evaluated.
    pub total: usize,
    /// Sentences failing on at least one argument.
    pub failed: usize,
    /// `failed / total * 100`, rounded to two decimals.
    pub failure_percentage: f64,
}

impl SuiteReport {
    fn from_tally(model: ModelId, suite: &str, tally: SuiteTally) -> Self {
        Self {
            model,
            suite: suite.to_string(),
            passed: tally.passed,
            total: tally.total,
            failed: tally.failed,
            failure_percentage: tally.failure_percentage(),
        }
    }

    fn print(&self) {
        println!("Performance on {}", self.suite);
        println!("{} passes out of {}", self.passed, self.total);
        println!("{}% failures", self.failure_percentage);
        println!("----------------------------------");
    }
}

/// Full sweep output: one report per (model, suite) pair, in run order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResults {
    /// When the sweep finished.
    pub timestamp: String,
    /// Per-suite reports.
    pub reports: Vec<SuiteReport>,
}

/// Run every record through the predictor, in order.
///
/// One blocking `predict` call per record; with a neural backend this is
/// the slow path of the whole sweep.
pub fn generate_predictions(
    predictor: &dyn Predictor,
    records: &[SentenceRecord],
) -> Result<Vec<Prediction>> {
    let mut predictions = Vec::with_capacity(records.len());
    for record in records {
        predictions.push(predictor.predict(&record.input_sentence())?);
    }
    Ok(predictions)
}

fn persist_predictions(path: &Path, predictions: &[Prediction]) -> Result<()> {
    let file = fs::File::create(path)
        .map_err(|e| Error::output(format!("failed to create {}: {}", path.display(), e)))?;
    serde_json::to_writer(file, predictions)
        .map_err(|e| Error::output(format!("failed to write {}: {}", path.display(), e)))
}

/// Evaluate one model over every configured suite.
///
/// Prints the model banner and per-suite summary blocks, and dumps the raw
/// prediction list for each suite before moving to the next one.
pub fn run_model(
    predictor: &dyn Predictor,
    model: ModelId,
    config: &EvalConfig,
) -> Result<Vec<SuiteReport>> {
    println!("Now evaluating model: {}", predictor.name());

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| Error::output(format!("cannot create output dir: {}", e)))?;

    let mut reports = Vec::with_capacity(config.suite_files.len());
    for suite_file in &config.suite_files {
        let records = load_suite(config.suite_dir.join(suite_file))?;
        log::info!(
            "{}: {} records loaded from {}",
            predictor.name(),
            records.len(),
            suite_file
        );

        let predictions = generate_predictions(predictor, &records)?;
        let tally = score_suite(&predictions, &records)?;

        let report = SuiteReport::from_tally(model, suite_file, tally);
        report.print();

        let dump = config
            .output_dir
            .join(format!("{}_{}", model.index(), suite_file));
        persist_predictions(&dump, &predictions)?;

        reports.push(report);
    }

    Ok(reports)
}

/// Run the sweep over the given model variants.
///
/// Each model's predictor is constructed once and held only for the
/// duration of its suites.
pub fn run_sweep_for(models: &[ModelId], config: &EvalConfig) -> Result<SweepResults> {
    let mut reports = Vec::new();
    for &model in models {
        let predictor = HttpPredictor::connect(&config.endpoint, model)?;
        reports.extend(run_model(&predictor, model, config)?);
    }
    Ok(SweepResults {
        timestamp: chrono::Utc::now().to_rfc3339(),
        reports,
    })
}

/// Run the full sweep: every registered model variant over every suite.
pub fn run_sweep(config: &EvalConfig) -> Result<SweepResults> {
    run_sweep_for(&ModelId::all(), config)
}
