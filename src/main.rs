//! reqfuse - Requirements file fusion CLI tool
//!
//! Fuses multiple requirements files into a single one, detecting
//! dependency conflicts along the way. Output goes to stdout unless
//! `-o` is given.

use clap::Parser;
use colored::Colorize;
use reqfuse::cli::CliArgs;
use reqfuse::orchestrator::{Orchestrator, RunConfig};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with fused output on stdout
fn init_tracing(args: &CliArgs) {
    let filter = match args.log_level() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = RunConfig::from_cli(&args);
    tracing::debug!(?config, "starting");

    let orchestrator = Orchestrator::new(config);
    let mut stdout = io::stdout().lock();
    let summary = orchestrator.run(&mut stdout)?;

    tracing::debug!(entries = summary.entries, "done");
    Ok(())
}
