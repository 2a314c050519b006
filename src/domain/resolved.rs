//! Fusion results

use super::{Bound, Operator, Version};
use indexmap::IndexMap;
use std::fmt;

/// The combined constraint for one package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedConstraint {
    /// No version constraint
    Unconstrained,
    /// Exactly one version (`==x`)
    Pinned(Version),
    /// Open-ended lower bound (`>=x` or `>x`)
    Lower(Bound),
    /// Open-ended upper bound (`<=y` or `<y`)
    Upper(Bound),
    /// Both a lower and an upper bound
    Range { lower: Bound, upper: Bound },
}

impl ResolvedConstraint {
    /// The bounds of this constraint in render order (lower bound first)
    pub fn clauses(&self) -> Vec<Bound> {
        match *self {
            ResolvedConstraint::Unconstrained => Vec::new(),
            ResolvedConstraint::Pinned(version) => vec![Bound::new(Operator::Equal, version)],
            ResolvedConstraint::Lower(bound) | ResolvedConstraint::Upper(bound) => vec![bound],
            ResolvedConstraint::Range { lower, upper } => vec![lower, upper],
        }
    }

    /// Check whether a version satisfies every clause
    pub fn admits(&self, version: Version) -> bool {
        self.clauses().iter().all(|bound| bound.admits(version))
    }
}

impl fmt::Display for ResolvedConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = self.clauses().iter().map(Bound::to_string).collect();
        f.write_str(&clauses.join(","))
    }
}

/// What a key of the fused output stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key is a literal pass-through line
    PassThrough,
    /// The key is a package name with its fused constraint
    Constraint(ResolvedConstraint),
}

/// Fused requirements, in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FusedRequirements {
    entries: IndexMap<String, Resolution>,
}

impl FusedRequirements {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key, keeping the position of an earlier insert
    pub fn insert(&mut self, key: impl Into<String>, resolution: Resolution) {
        self.entries.insert(key.into(), resolution);
    }

    /// Look up the resolution for a key
    pub fn get(&self, key: &str) -> Option<&Resolution> {
        self.entries.get(key)
    }

    /// Look up the fused constraint for a package
    pub fn constraint(&self, package: &str) -> Option<&ResolvedConstraint> {
        match self.entries.get(package) {
            Some(Resolution::Constraint(constraint)) => Some(constraint),
            _ => None,
        }
    }

    /// Iterate over keys and resolutions in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resolution)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
