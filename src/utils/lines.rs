//! Offset-to-line mapping for reporting matches

use std::ops::Range;

/// Start offset of every line in a text
#[derive(Debug, Clone)]
pub struct LineMap {
    offsets: Vec<usize>,
    text_len: usize,
}

impl LineMap {
    /// Build line offset map from content
    pub fn new(content: &[u8]) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            memchr::memchr_iter(b'\n', content)
                .map(|i| i + 1)
                .filter(|&start| start < content.len()),
        );
        Self {
            offsets,
            text_len: content.len(),
        }
    }

    /// Number of lines (an empty text has one empty line)
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Zero-based line containing `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        self.offsets.partition_point(|&start| start <= offset) - 1
    }

    /// One-based (line, column) of `offset`, as editors and ripgrep print them
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        (line + 1, offset - self.offsets[line] + 1)
    }

    /// Byte range of a zero-based line, without its newline
    pub fn line_range(&self, line: usize, content: &[u8]) -> Range<usize> {
        let start = self.offsets[line];
        let mut end = self.offsets.get(line + 1).copied().unwrap_or(self.text_len);
        for terminator in [b'\n', b'\r'] {
            if end > start && content.get(end - 1) == Some(&terminator) {
                end -= 1;
            }
        }
        start..end
    }
}
