//! Requirements file text output
//!
//! One line per key: the package name followed by its comma-separated
//! clauses (`pytorch>=2.2,<=3.0`), or a pass-through line as it was read.

use crate::domain::{FusedRequirements, Resolution};
use crate::output::OutputFormatter;
use std::io::Write;

/// Formatter producing requirements file text
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, fused: &FusedRequirements, writer: &mut dyn Write) -> std::io::Result<()> {
        for (key, resolution) in fused.iter() {
            match resolution {
                Resolution::PassThrough => writeln!(writer, "{}", key)?,
                Resolution::Constraint(constraint) => writeln!(writer, "{}{}", key, constraint)?,
            }
        }
        Ok(())
    }
}
