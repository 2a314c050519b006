//! Requirements file line parser
//!
//! Handles line formats:
//! - Requirement: `Pillow`, `Pillow<=10.0`, `torch >= 2.2`
//! - Comment: `# pinned for CUDA 11` (skipped), `numpy==1.26  # note` (comment stripped)
//! - Flag: `--index-url https://...`, `-e ./local` (passed through)
//! - VCS reference: `git+https://github.com/org/repo.git` (passed through)

use crate::domain::{RawEntry, Version};
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

/// Line prefixes that mark a VCS reference
const VCS_PREFIXES: [&str; 4] = ["git+", "hg+", "svn+", "bzr+"];

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:(?P<op>[<>=!~]+)\s*(?P<version>\d+(?:\.\d+)*))?$",
    )
    .unwrap()
});
static INLINE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+#.*$").unwrap());

/// Parse the contents of a requirements file
///
/// `source_name` is only used in error messages. Operator tokens are kept
/// as written; validating them is left to the fuser so that errors can name
/// the package.
pub fn parse_requirements(source_name: &str, text: &str) -> Result<Vec<RawEntry>, ParseError> {
    let mut entries = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if is_pass_through(line) {
            entries.push(RawEntry::pass_through(line));
            continue;
        }

        let entry = parse_requirement_line(line)
            .ok_or_else(|| ParseError::malformed_line(source_name, index + 1, line))?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Returns true for flag lines and VCS references
pub fn is_pass_through(line: &str) -> bool {
    line.starts_with('-') || VCS_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

fn parse_requirement_line(line: &str) -> Option<RawEntry> {
    let line = strip_inline_comment(line);
    let caps = REQUIREMENT_RE.captures(line)?;

    let name = caps.name("name")?.as_str();
    let operator = caps.name("op").map_or("", |m| m.as_str());
    let version = caps.name("version").map_or("", |m| m.as_str());

    // The pattern accepts any dotted number, but fusion needs major.minor
    if !version.is_empty() && Version::parse(version).is_err() {
        return None;
    }

    Some(RawEntry::requirement(name, operator, version))
}

fn strip_inline_comment(line: &str) -> &str {
    match INLINE_COMMENT_RE.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    }
}
