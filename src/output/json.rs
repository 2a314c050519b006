//! JSON output formatter for machine processing

use crate::domain::{FusedRequirements, Resolution};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    requirements: Vec<JsonEntry>,
}

/// One fused key
#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry {
    /// A package with its clauses, e.g. `[">=2.2", "<=3.0"]`
    Package {
        name: String,
        constraints: Vec<String>,
    },
    /// A pass-through line
    Line { line: String },
}

impl JsonOutput {
    fn from_fused(fused: &FusedRequirements) -> Self {
        let requirements = fused
            .iter()
            .map(|(key, resolution)| match resolution {
                Resolution::PassThrough => JsonEntry::Line {
                    line: key.to_string(),
                },
                Resolution::Constraint(constraint) => JsonEntry::Package {
                    name: key.to_string(),
                    constraints: constraint.clauses().iter().map(|b| b.to_string()).collect(),
                },
            })
            .collect();
        Self { requirements }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, fused: &FusedRequirements, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput::from_fused(fused);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
