//! Parsed requirement lines

use std::fmt;

/// One line of a requirements file, as produced by the line parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEntry {
    /// `name[operator version]`; operator and version are both empty or both set
    Requirement {
        name: String,
        operator: String,
        version: String,
    },
    /// A flag or VCS reference line, carried to the output unchanged
    PassThrough(String),
}

impl RawEntry {
    /// Creates a requirement entry
    pub fn requirement(
        name: impl Into<String>,
        operator: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        RawEntry::Requirement {
            name: name.into(),
            operator: operator.into(),
            version: version.into(),
        }
    }

    /// Creates a requirement entry without a version
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self::requirement(name, "", "")
    }

    /// Creates a pass-through entry
    pub fn pass_through(line: impl Into<String>) -> Self {
        RawEntry::PassThrough(line.into())
    }

    /// The key this entry is grouped under: the package name, or the literal line
    pub fn key(&self) -> &str {
        match self {
            RawEntry::Requirement { name, .. } => name,
            RawEntry::PassThrough(line) => line,
        }
    }

    /// Returns true for pass-through lines
    pub fn is_pass_through(&self) -> bool {
        matches!(self, RawEntry::PassThrough(_))
    }
}

impl fmt::Display for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawEntry::Requirement {
                name,
                operator,
                version,
            } => write!(f, "{}{}{}", name, operator, version),
            RawEntry::PassThrough(line) => f.write_str(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key() {
        assert_eq!(RawEntry::requirement("yapf", "==", "0.3").key(), "yapf");
        assert_eq!(
            RawEntry::pass_through("--index-url https://pypi.org/simple").key(),
            "--index-url https://pypi.org/simple"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RawEntry::requirement("yapf", "==", "0.3").to_string(), "yapf==0.3");
        assert_eq!(RawEntry::unversioned("timm").to_string(), "timm");
    }

    #[test]
    fn test_is_pass_through() {
        assert!(RawEntry::pass_through("git+https://example.com/repo.git").is_pass_through());
        assert!(!RawEntry::unversioned("timm").is_pass_through());
    }
}
