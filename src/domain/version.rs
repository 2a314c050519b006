//! Major/minor version numbers
//!
//! Versions are compared at `major.minor` granularity only. Anything after
//! the minor component (`3.2.1` -> `3.2`) is dropped when parsing.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `major.minor` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
}

impl Version {
    /// Creates a new version
    pub const fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Parse a dotted numeric string with at least two components
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::invalid_version(s);

        let mut parts = s.trim().split('.');
        let major = parse_component(parts.next()).ok_or_else(invalid)?;
        let minor = parse_component(parts.next()).ok_or_else(invalid)?;
        // Trailing components still have to be numeric
        if parts.any(|p| parse_component(Some(p)).is_none()) {
            return Err(invalid());
        }

        Ok(Self { major, minor })
    }
}

fn parse_component(part: Option<&str>) -> Option<u64> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
