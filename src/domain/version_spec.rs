//! Comparison operators and version specifications
//!
//! Handles constraints like `<2.0`, `<=2.0`, `==2.0`, `>=2.0`, `>2.0`,
//! and the absence of a constraint (`pkgA` on its own).

use super::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A comparison operator in a requirement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `==`
    Equal,
    /// `>=`
    GreaterOrEqual,
    /// `>`
    Greater,
}

impl Operator {
    /// All supported operators, in display order
    pub const ALL: [Operator; 5] = [
        Operator::Less,
        Operator::LessOrEqual,
        Operator::Equal,
        Operator::GreaterOrEqual,
        Operator::Greater,
    ];

    /// Parse an operator token, `None` if unsupported
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "<" => Some(Operator::Less),
            "<=" => Some(Operator::LessOrEqual),
            "==" => Some(Operator::Equal),
            ">=" => Some(Operator::GreaterOrEqual),
            ">" => Some(Operator::Greater),
            _ => None,
        }
    }

    /// The operator as written in a requirements file
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
            Operator::Equal => "==",
            Operator::GreaterOrEqual => ">=",
            Operator::Greater => ">",
        }
    }

    /// Comma-separated list of supported operators, for error messages
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(Operator::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns true if the bound itself is allowed (`<=`, `==`, `>=`)
    pub fn is_inclusive(&self) -> bool {
        matches!(
            self,
            Operator::LessOrEqual | Operator::Equal | Operator::GreaterOrEqual
        )
    }

    /// Returns true for `<` and `<=`
    pub fn is_upper(&self) -> bool {
        matches!(self, Operator::Less | Operator::LessOrEqual)
    }

    /// Returns true for `>` and `>=`
    pub fn is_lower(&self) -> bool {
        matches!(self, Operator::Greater | Operator::GreaterOrEqual)
    }

    /// Check whether `candidate` satisfies `<op> bound`
    pub fn satisfied_by(&self, candidate: Version, bound: Version) -> bool {
        match self {
            Operator::Less => candidate < bound,
            Operator::LessOrEqual => candidate <= bound,
            Operator::Equal => candidate == bound,
            Operator::GreaterOrEqual => candidate >= bound,
            Operator::Greater => candidate > bound,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single operator/version pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bound {
    pub operator: Operator,
    pub version: Version,
}

impl Bound {
    /// Creates a new bound
    pub const fn new(operator: Operator, version: Version) -> Self {
        Self { operator, version }
    }

    /// Check whether `candidate` lies within this bound
    pub fn admits(&self, candidate: Version) -> bool {
        self.operator.satisfied_by(candidate, self.version)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

/// A version specification collected from one requirement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSpec {
    /// Package listed without a version
    Unconstrained,
    /// Package listed with an operator and a version
    Bound(Bound),
}

impl VersionSpec {
    /// Creates a bounded version spec
    pub const fn bound(operator: Operator, version: Version) -> Self {
        VersionSpec::Bound(Bound::new(operator, version))
    }

    /// Returns the bound if this spec carries a version
    pub fn as_bound(&self) -> Option<&Bound> {
        match self {
            VersionSpec::Bound(bound) => Some(bound),
            VersionSpec::Unconstrained => None,
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Unconstrained => Ok(()),
            VersionSpec::Bound(bound) => write!(f, "{}", bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.as_str()), Some(op));
        }
    }

    #[test]
    fn test_operator_parse_unsupported() {
        assert_eq!(Operator::parse("!="), None);
        assert_eq!(Operator::parse("~="), None);
        assert_eq!(Operator::parse("==="), None);
        assert_eq!(Operator::parse("=>"), None);
        assert_eq!(Operator::parse(""), None);
    }

    #[test]
    fn test_operator_direction() {
        assert!(Operator::Less.is_upper());
        assert!(Operator::LessOrEqual.is_upper());
        assert!(Operator::Greater.is_lower());
        assert!(Operator::GreaterOrEqual.is_lower());
        assert!(!Operator::Equal.is_upper());
        assert!(!Operator::Equal.is_lower());
    }

    #[test]
    fn test_operator_inclusive() {
        assert!(Operator::LessOrEqual.is_inclusive());
        assert!(Operator::GreaterOrEqual.is_inclusive());
        assert!(Operator::Equal.is_inclusive());
        assert!(!Operator::Less.is_inclusive());
        assert!(!Operator::Greater.is_inclusive());
    }

    #[test]
    fn test_bound_admits() {
        let v2 = Version::new(2, 0);
        assert!(Bound::new(Operator::LessOrEqual, v2).admits(v2));
        assert!(!Bound::new(Operator::Less, v2).admits(v2));
        assert!(Bound::new(Operator::Greater, v2).admits(Version::new(2, 1)));
        assert!(!Bound::new(Operator::Greater, v2).admits(Version::new(1, 9)));
        assert!(Bound::new(Operator::Equal, v2).admits(v2));
    }

    #[test]
    fn test_display() {
        let spec = VersionSpec::bound(Operator::GreaterOrEqual, Version::new(2, 2));
        assert_eq!(spec.to_string(), ">=2.2");
        assert_eq!(VersionSpec::Unconstrained.to_string(), "");
    }

    #[test]
    fn test_expected_list() {
        assert_eq!(Operator::expected_list(), "<, <=, ==, >=, >");
    }

    #[test]
    fn test_serde_operator() {
        let json = serde_json::to_string(&Operator::GreaterOrEqual).unwrap();
        assert_eq!(json, "\"greater_or_equal\"");
    }
}
