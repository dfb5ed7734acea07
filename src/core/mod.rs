//! Analysis core: file discovery, parsing, and extraction.
//!
//! Scanners in `extract` turn file contents into raw findings. Rules in
//! `crate::rules` turn those findings and the loaded messages into issues.

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod monitoring;
pub mod parsers;
pub mod pdf;
pub mod suppressions;
pub mod utils;

pub use context::{CheckContext, MessageData, SourceFile};
pub use data::*;
