//! rolecheck - SRL / Open IE evaluation CLI.
//!
//! # Usage
//!
//! ```bash
//! # Full sweep: both models over the seven suites
//! rolecheck run --suite-dir suites
//!
//! # One model, one suite, custom inference server
//! rolecheck run --model openie --suite clefts.json --endpoint http://gpu-box:8000
//!
//! # Inspect suites without running inference
//! rolecheck suites --suite-dir suites
//! rolecheck validate --suite-dir suites
//!
//! # Show registered pretrained archives
//! rolecheck models
//! ```

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let cli = rolecheck::cli::Cli::parse();
    match rolecheck::cli::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
