//! File parsers for locale and article files.
//!
//! - `json`: locale JSON files, flattened to dotted keys
//! - `frontmatter`: Markdown articles with YAML frontmatter

pub mod frontmatter;
pub mod json;
