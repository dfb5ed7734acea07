//! Helpers shared by the scanners.
//!
//! - `glob_matcher`: key patterns and the unused-key whitelist
//! - `line_index`: byte offset to line/column lookups

pub mod glob_matcher;
pub mod line_index;

pub use glob_matcher::*;
pub use line_index::LineIndex;
