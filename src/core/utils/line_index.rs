use crate::utils::byte_to_col;

/// Byte offsets where each line of a file starts.
///
/// Line 1 starts at offset 0, line 2 after the first `'\n'`, and so on.
/// Lookups are a binary search, so whole-file regex matches can be mapped
/// back to line numbers cheaply.
#[derive(Debug, Clone)]
pub struct LineIndex {
    offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut offsets = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                offsets.push(i + 1);
            }
        }
        Self { offsets }
    }

    /// 1-based line number containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// 1-based line and column (in chars) for `offset`.
    pub fn line_col(&self, content: &str, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        let start = self.offsets[line - 1];
        (line, byte_to_col(&content[start..], offset - start))
    }

    /// Text of the given 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, content: &'a str, line: usize) -> &'a str {
        let Some(&start) = self.offsets.get(line.saturating_sub(1)) else {
            return "";
        };
        let end = self
            .offsets
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(content.len());
        content[start..end].trim_end_matches('\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_of() {
        let index = LineIndex::new("line1\nline2\nline3");
        assert_eq!(index.offsets, vec![0, 6, 12]);
        assert_eq!(index.line_of(0), 1);
        assert_eq!(index.line_of(3), 1);
        assert_eq!(index.line_of(6), 2);
        assert_eq!(index.line_of(8), 2);
        assert_eq!(index.line_of(12), 3);
    }

    #[test]
    fn test_line_col_counts_chars() {
        let content = "a\n经期 x";
        let index = LineIndex::new(content);
        let offset = content.find('x').unwrap();
        assert_eq!(index.line_col(content, offset), (2, 4));
    }

    #[test]
    fn test_line_text() {
        let content = "first\r\nsecond\nthird";
        let index = LineIndex::new(content);
        assert_eq!(index.line_text(content, 1), "first");
        assert_eq!(index.line_text(content, 2), "second");
        assert_eq!(index.line_text(content, 3), "third");
        assert_eq!(index.line_text(content, 9), "");
    }
}
