//! Regex scanners that turn one source file into raw findings.
//!
//! Scanners never look at configuration beyond what they are handed and never
//! decide severity; rules in `crate::rules` do that.

pub mod compliance;
pub mod hardcode;
pub mod images;
pub mod translation_calls;
pub mod urls;

use crate::core::{
    SourceContext, SourceLocation,
    suppressions::{SuppressibleRule, Suppressions, is_comment_line},
    utils::LineIndex,
};

/// Resolves byte offsets of one file to displayable source contexts.
pub struct FileCursor<'a> {
    pub file_path: &'a str,
    pub content: &'a str,
    line_index: LineIndex,
}

impl<'a> FileCursor<'a> {
    pub fn new(file_path: &'a str, content: &'a str) -> Self {
        Self {
            file_path,
            content,
            line_index: LineIndex::new(content),
        }
    }

    pub fn line_of(&self, offset: usize) -> usize {
        self.line_index.line_of(offset)
    }

    pub fn line_text(&self, line: usize) -> &'a str {
        self.line_index.line_text(self.content, line)
    }

    pub fn context_at(&self, offset: usize) -> SourceContext {
        let (line, col) = self.line_index.line_col(self.content, offset);
        SourceContext::new(
            SourceLocation::new(self.file_path, line, col),
            self.line_text(line),
        )
    }

    /// True when the line holding `offset` is a comment or has the rule suppressed.
    pub fn is_skipped(
        &self,
        offset: usize,
        suppressions: &Suppressions,
        rule: SuppressibleRule,
    ) -> bool {
        let line = self.line_of(offset);
        is_comment_line(self.line_text(line).trim_start()) || suppressions.is_suppressed(line, rule)
    }
}
