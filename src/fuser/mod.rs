//! Constraint fusion
//!
//! Fusion runs in two passes:
//! - [`group_entries`] collects every entry of every source under its key,
//!   converting operators and versions on the way
//! - [`fuse`] folds each package's specifications independently with
//!   [`fuse_package`]
//!
//! Keys keep their first-appearance order, so the fused output lists
//! packages and pass-through lines in the order they were first seen.

mod package;

pub use package::fuse_package;

use crate::domain::{
    FusedRequirements, Operator, RawEntry, Resolution, Version, VersionSpec,
};
use crate::error::FuseError;
use indexmap::IndexMap;
use tracing::debug;

/// Everything collected under one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// A literal pass-through line
    PassThrough,
    /// All specifications of one package, in input order
    Package(Vec<VersionSpec>),
}

/// Group entries from all sources by package name
pub fn group_entries(sources: &[Vec<RawEntry>]) -> Result<IndexMap<String, Group>, FuseError> {
    let mut groups: IndexMap<String, Group> = IndexMap::new();

    for entry in sources.iter().flatten() {
        match entry {
            RawEntry::PassThrough(line) => {
                groups.entry(line.clone()).or_insert(Group::PassThrough);
            }
            RawEntry::Requirement {
                name,
                operator,
                version,
            } => {
                let spec = to_version_spec(name, operator, version)?;
                let group = groups
                    .entry(name.clone())
                    .or_insert_with(|| Group::Package(Vec::new()));
                if let Group::Package(specs) = group {
                    specs.push(spec);
                }
            }
        }
    }

    Ok(groups)
}

fn to_version_spec(name: &str, operator: &str, version: &str) -> Result<VersionSpec, FuseError> {
    if version.is_empty() {
        return Ok(VersionSpec::Unconstrained);
    }

    let op = Operator::parse(operator)
        .ok_or_else(|| FuseError::unsupported_operator(name, operator))?;
    let version = Version::parse(version).map_err(|source| FuseError::InvalidVersion {
        package: name.to_string(),
        source,
    })?;

    Ok(VersionSpec::bound(op, version))
}

/// Fuse grouped specifications, stopping at the first package that fails
pub fn fuse(groups: &IndexMap<String, Group>) -> Result<FusedRequirements, FuseError> {
    let mut fused = FusedRequirements::new();

    for (key, group) in groups {
        match group {
            Group::PassThrough => fused.insert(key.clone(), Resolution::PassThrough),
            Group::Package(specs) => {
                let constraint = fuse_package(key, specs)?;
                debug!(package = %key, specs = specs.len(), constraint = %constraint, "fused");
                fused.insert(key.clone(), Resolution::Constraint(constraint));
            }
        }
    }

    Ok(fused)
}

/// Group and fuse in one step
pub fn fuse_sources(sources: &[Vec<RawEntry>]) -> Result<FusedRequirements, FuseError> {
    let groups = group_entries(sources)?;
    fuse(&groups)
}
