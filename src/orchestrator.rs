//! Orchestrator for the fuse workflow
//!
//! This module provides:
//! - Workflow coordination: validate → read → parse → fuse → render → write
//! - Run configuration built from CLI arguments
//! - All-or-nothing output: nothing is written unless fusion succeeds

use crate::cli::CliArgs;
use crate::domain::FusedRequirements;
use crate::error::{AppError, InputError};
use crate::fuser::fuse_sources;
use crate::output::{render, OutputFormat};
use crate::parser::parse_requirements;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Input requirements files, in command-line order
    pub inputs: Vec<PathBuf>,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
    /// Allow replacing an existing output file
    pub overwrite: bool,
    /// Output format
    pub format: OutputFormat,
}

impl RunConfig {
    /// Create a new run configuration writing text to stdout
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            output: None,
            overwrite: false,
            format: OutputFormat::Text,
        }
    }

    /// Set the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set whether an existing output file may be replaced
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            inputs: args.input_paths(),
            output: args.output.clone(),
            overwrite: args.overwrite,
            format: OutputFormat::from_cli(args.json),
        }
    }
}

/// What a successful run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Number of fused lines written
    pub entries: usize,
    /// Output file, if one was written
    pub output: Option<PathBuf>,
}

/// Orchestrator for coordinating the fuse workflow
pub struct Orchestrator {
    config: RunConfig,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Check inputs exist and the output may be written
    pub fn validate(&self) -> Result<(), InputError> {
        if self.config.inputs.is_empty() {
            return Err(InputError::NoInputFiles);
        }
        for input in &self.config.inputs {
            if !input.is_file() {
                return Err(InputError::file_not_found(input));
            }
        }
        if let Some(output) = &self.config.output {
            if output.is_file() && !self.config.overwrite {
                return Err(InputError::output_already_exists(output));
            }
        }
        Ok(())
    }

    /// Validate, read, parse and fuse every input
    pub fn fuse(&self) -> Result<FusedRequirements, AppError> {
        self.validate()?;

        let mut sources = Vec::with_capacity(self.config.inputs.len());
        for input in &self.config.inputs {
            let text = read_file(input)?;
            let entries = parse_requirements(&input.display().to_string(), &text)?;
            debug!(path = %input.display(), entries = entries.len(), "parsed requirements");
            sources.push(entries);
        }

        Ok(fuse_sources(&sources)?)
    }

    /// Run the whole workflow, writing to the output file or `stdout`
    pub fn run(&self, stdout: &mut dyn Write) -> Result<RunSummary, AppError> {
        let fused = self.fuse()?;
        let rendered = render(&fused, self.config.format)
            .map_err(|e| InputError::write_error("<output>", e))?;

        match &self.config.output {
            Some(path) => {
                write_file(path, &rendered)?;
                info!(path = %path.display(), entries = fused.len(), "wrote fused requirements");
            }
            None => {
                stdout
                    .write_all(rendered.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| InputError::write_error("<stdout>", e))?;
            }
        }

        Ok(RunSummary {
            entries: fused.len(),
            output: self.config.output.clone(),
        })
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|e| InputError::read_error(path, e))
}

fn write_file(path: &Path, contents: &str) -> Result<(), InputError> {
    fs::write(path, contents).map_err(|e| InputError::write_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuseError;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_from_cli() {
        use clap::Parser;
        let args = CliArgs::parse_from(["reqfuse", "-i", "a.txt|b.txt", "-o", "out.txt", "--json"]);
        let config = RunConfig::from_cli(&args);
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert!(!config.overwrite);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_validate_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let orchestrator = Orchestrator::new(RunConfig::new(vec![missing.clone()]));
        let err = orchestrator.validate().unwrap_err();
        assert!(matches!(err, InputError::FileNotFound { path } if path == missing));
    }

    #[test]
    fn test_validate_no_inputs() {
        let orchestrator = Orchestrator::new(RunConfig::new(Vec::new()));
        assert!(matches!(
            orchestrator.validate(),
            Err(InputError::NoInputFiles)
        ));
    }

    #[test]
    fn test_validate_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "a.txt", "numpy\n");
        let output = write(&dir, "out.txt", "old\n");

        let config = RunConfig::new(vec![input.clone()]).with_output(&output);
        assert!(matches!(
            Orchestrator::new(config).validate(),
            Err(InputError::OutputAlreadyExists { .. })
        ));

        let config = RunConfig::new(vec![input])
            .with_output(&output)
            .with_overwrite(true);
        assert!(Orchestrator::new(config).validate().is_ok());
    }

    #[test]
    fn test_run_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.txt", "wandb\npytorch>=2.2\n");
        let b = write(&dir, "b.txt", "wandb\npytorch<=3.0\neditdistance==3.2\n");

        let mut stdout: Vec<u8> = Vec::new();
        let summary = Orchestrator::new(RunConfig::new(vec![a, b]))
            .run(&mut stdout)
            .unwrap();

        assert_eq!(summary.entries, 3);
        assert!(summary.output.is_none());
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            "wandb\npytorch>=2.2,<=3.0\neditdistance==3.2\n"
        );
    }

    #[test]
    fn test_run_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.txt", "numpy>=1.0\n");
        let output = dir.path().join("out.txt");

        let mut stdout: Vec<u8> = Vec::new();
        Orchestrator::new(RunConfig::new(vec![a]).with_output(&output))
            .run(&mut stdout)
            .unwrap();

        assert!(stdout.is_empty());
        assert_eq!(fs::read_to_string(&output).unwrap(), "numpy>=1.0\n");
    }

    #[test]
    fn test_conflict_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.txt", "pkgA==3.2\n");
        let b = write(&dir, "b.txt", "pkgA==4.0\n");
        let output = dir.path().join("out.txt");

        let mut stdout: Vec<u8> = Vec::new();
        let err = Orchestrator::new(RunConfig::new(vec![a, b]).with_output(&output))
            .run(&mut stdout)
            .unwrap_err();

        assert!(matches!(err, AppError::Fuse(FuseError::Conflict { .. })));
        assert!(!output.exists());
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "broken.txt", "numpy\npkgA>=\n");

        let err = Orchestrator::new(RunConfig::new(vec![a]))
            .fuse()
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("broken.txt"));
        assert!(msg.contains("line 2"));
    }
}
