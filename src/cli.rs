//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::eval::runner::{run_sweep_for, EvalConfig};
use crate::predictors::registry::ModelId;
use crate::suite::{load_suite, validate_suite, SUITE_FILES};
use crate::{Error, Result};

/// Top-level argument parser.
#[derive(Parser)]
#[command(name = "rolecheck")]
#[command(
    author,
    version,
    about = "Evaluate pretrained SRL and Open IE models against linguistic test suites",
    long_about = r#"
rolecheck - argument-structure evaluation harness

Feeds hand-crafted linguistic test suites through pretrained semantic role
labeling and open information extraction models, and counts how often the
annotated ARG0/ARG1 tokens show up in the predicted verb frames.

EXAMPLES:
  rolecheck run --suite-dir suites --endpoint http://127.0.0.1:8000
  rolecheck run --model srl-bert --suite active_passive.json
  rolecheck suites --suite-dir suites
  rolecheck validate --suite-dir suites
  rolecheck models
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the evaluation sweep
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// List suite files and their record counts
    Suites(SuiteArgs),

    /// Check suite files for annotation problems
    #[command(visible_alias = "v")]
    Validate(SuiteArgs),

    /// List pretrained model variants
    Models,
}

/// Arguments for the `run` subcommand.
#[derive(Args)]
pub struct RunArgs {
    /// Directory containing the suite JSON files
    #[arg(long, default_value = ".")]
    pub suite_dir: PathBuf,

    /// Directory for raw prediction dumps
    #[arg(long, default_value = "outputs")]
    pub out_dir: PathBuf,

    /// Base URL of the inference server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub endpoint: String,

    /// Restrict the sweep to one model variant
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,

    /// Override the suite list (repeatable)
    #[arg(long = "suite", value_name = "FILE")]
    pub suites: Vec<String>,
}

/// Arguments shared by `suites` and `validate`.
#[derive(Args)]
pub struct SuiteArgs {
    /// Directory containing the suite JSON files
    #[arg(long, default_value = ".")]
    pub suite_dir: PathBuf,

    /// Override the suite list (repeatable)
    #[arg(long = "suite", value_name = "FILE")]
    pub suites: Vec<String>,
}

/// Model variant selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModelArg {
    /// BERT-based semantic role labeling model
    SrlBert,
    /// Open information extraction model
    #[value(name = "openie")]
    OpenIe,
}

impl From<ModelArg> for ModelId {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::SrlBert => ModelId::SrlBert,
            ModelArg::OpenIe => ModelId::OpenIe,
        }
    }
}

/// Dispatch a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Suites(args) => suites(args),
        Commands::Validate(args) => validate(args),
        Commands::Models => models(),
    }
}

fn suite_list(overrides: Vec<String>) -> Vec<String> {
    if overrides.is_empty() {
        SUITE_FILES.iter().map(|s| s.to_string()).collect()
    } else {
        overrides
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = EvalConfig {
        suite_files: suite_list(args.suites),
        suite_dir: args.suite_dir,
        output_dir: args.out_dir,
        endpoint: args.endpoint,
    };

    let models: Vec<ModelId> = match args.model {
        Some(arg) => vec![arg.into()],
        None => ModelId::all().to_vec(),
    };

    run_sweep_for(&models, &config)?;
    Ok(())
}

fn suites(args: SuiteArgs) -> Result<()> {
    for suite_file in suite_list(args.suites) {
        let records = load_suite(args.suite_dir.join(&suite_file))?;
        println!("{}: {} records", suite_file, records.len());
    }
    Ok(())
}

fn validate(args: SuiteArgs) -> Result<()> {
    let mut problem_count = 0;

    for suite_file in suite_list(args.suites) {
        let records = load_suite(args.suite_dir.join(&suite_file))?;
        let problems = validate_suite(&records);
        if problems.is_empty() {
            println!("{}: ok ({} records)", suite_file, records.len());
        } else {
            println!("{}:", suite_file);
            for problem in &problems {
                println!("  - {}", problem);
            }
            problem_count += problems.len();
        }
    }

    if problem_count > 0 {
        return Err(Error::suite(format!(
            "{} annotation problem(s) found",
            problem_count
        )));
    }
    Ok(())
}

fn models() -> Result<()> {
    for model in ModelId::all() {
        println!("{:<10} {:<32} {}", model.slug(), model.name(), model.archive_url());
    }
    Ok(())
}
