//! reqfuse - Requirements file fusion library
//!
//! This library merges several requirements files into a single one:
//! - Parsing requirement lines (`name[operator version]`)
//! - Fusing every package's constraints into the tightest combined one
//! - Detecting packages whose constraints admit no version
//! - Rendering the result as requirements text or JSON

pub mod cli;
pub mod domain;
pub mod error;
pub mod fuser;
pub mod orchestrator;
pub mod output;
pub mod parser;
