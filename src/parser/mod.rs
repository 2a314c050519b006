//! Requirements file parsing
//!
//! Turns requirements file text into [`RawEntry`](crate::domain::RawEntry)
//! values, one per meaningful line.

mod requirements;

pub use requirements::{is_pass_through, parse_requirements};
