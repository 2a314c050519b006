//! Output formatting for fused requirements
//!
//! This module provides:
//! - Requirements file text (the default)
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::FusedRequirements;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Requirements file text
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

impl OutputFormat {
    /// Pick the format from CLI flags
    pub fn from_cli(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write fused requirements to the given writer
    fn format(&self, fused: &FusedRequirements, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create a formatter for the given format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Format fused requirements into a string
pub fn render(fused: &FusedRequirements, format: OutputFormat) -> std::io::Result<String> {
    let mut buffer: Vec<u8> = Vec::new();
    create_formatter(format).format(fused, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
