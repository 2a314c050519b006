//! Core domain models for reqfuse
//!
//! This module contains the fundamental types used throughout the application:
//! - Versions compared at `major.minor` granularity
//! - Operators and version specifications
//! - Parsed requirement lines
//! - Fused constraints

mod entry;
mod resolved;
mod version;
mod version_spec;

pub use entry::RawEntry;
pub use resolved::{FusedRequirements, Resolution, ResolvedConstraint};
pub use version::Version;
pub use version_spec::{Bound, Operator, VersionSpec};
