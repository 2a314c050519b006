//! Application error types using thiserror
//!
//! Error hierarchy:
//! - InputError: Issues with input/output files and arguments
//! - ParseError: Requirement lines or versions that do not match the expected shape
//! - FuseError: Constraints that cannot be combined

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input/output file related errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Requirement parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Constraint fusion errors
    #[error(transparent)]
    Fuse(#[from] FuseError),
}

/// Errors related to input and output files
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file does not exist
    #[error("input file '{path}' not found")]
    FileNotFound { path: PathBuf },

    /// Output file exists and overwrite was not requested
    #[error("output file '{path}' already exists. use -w --overwrite to bypass")]
    OutputAlreadyExists { path: PathBuf },

    /// No input path left after splitting the argument
    #[error("no input files given")]
    NoInputFiles,

    /// Failed to read an input file
    #[error("failed to read input file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("failed to write output file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while parsing requirement text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line that is neither a requirement nor a pass-through line
    #[error("malformed requirement in {source_name} line {line_number}: '{line}'")]
    MalformedLine {
        source_name: String,
        line_number: usize,
        line: String,
    },

    /// A version string without two numeric components
    #[error("invalid version '{value}': expected at least 'major.minor'")]
    InvalidVersion { value: String },
}

/// Errors raised while fusing constraints
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FuseError {
    /// No version satisfies every constraint of a package
    #[error("dependency conflict for package '{package}' with versions {versions}")]
    Conflict { package: String, versions: String },

    /// Operator outside `<`, `<=`, `==`, `>=`, `>`
    #[error("unsupported operator '{operator}' for package '{package}'. expected one of {expected}")]
    UnsupportedOperator {
        package: String,
        operator: String,
        expected: String,
    },

    /// Version that could not be parsed
    #[error("invalid version for package '{package}': {source}")]
    InvalidVersion {
        package: String,
        #[source]
        source: ParseError,
    },
}

impl InputError {
    /// Creates a new FileNotFound error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        InputError::FileNotFound { path: path.into() }
    }

    /// Creates a new OutputAlreadyExists error
    pub fn output_already_exists(path: impl Into<PathBuf>) -> Self {
        InputError::OutputAlreadyExists { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl ParseError {
    /// Creates a new MalformedLine error
    pub fn malformed_line(
        source_name: impl Into<String>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Self {
        ParseError::MalformedLine {
            source_name: source_name.into(),
            line_number,
            line: line.into(),
        }
    }

    /// Creates a new InvalidVersion error
    pub fn invalid_version(value: impl Into<String>) -> Self {
        ParseError::InvalidVersion {
            value: value.into(),
        }
    }
}

impl FuseError {
    /// Creates a new Conflict error
    pub fn conflict(package: impl Into<String>, versions: impl Into<String>) -> Self {
        FuseError::Conflict {
            package: package.into(),
            versions: versions.into(),
        }
    }

    /// Creates a new UnsupportedOperator error
    pub fn unsupported_operator(package: impl Into<String>, operator: impl Into<String>) -> Self {
        FuseError::UnsupportedOperator {
            package: package.into(),
            operator: operator.into(),
            expected: crate::domain::Operator::expected_list(),
        }
    }

    /// Returns the package this error is about
    pub fn package(&self) -> &str {
        match self {
            FuseError::Conflict { package, .. }
            | FuseError::UnsupportedOperator { package, .. }
            | FuseError::InvalidVersion { package, .. } => package,
        }
    }
}
