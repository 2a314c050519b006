//! CLI argument parsing module for reqfuse

use clap::Parser;
use std::path::PathBuf;

/// Requirements file fuser
#[derive(Parser, Debug, Clone)]
#[command(
    name = "reqfuse",
    version,
    about = "Fuse multiple requirements files into one, detecting dependency conflicts"
)]
pub struct CliArgs {
    /// Path(s) to requirements files, pipe '|' separated if many are provided
    #[arg(short, long)]
    pub input: String,

    /// Path to the output requirements file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short = 'w', long)]
    pub overwrite: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Input paths split on '|', trimmed, with empty segments dropped
    pub fn input_paths(&self) -> Vec<PathBuf> {
        split_inputs(&self.input)
    }

    /// Log filter directive for the verbosity flags
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

/// Split a pipe-separated list of paths
pub fn split_inputs(input: &str) -> Vec<PathBuf> {
    input
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
