//! Position tracking for prompt source text
//!
//! Nodes carry byte spans into the original text plus human-facing line and
//! column numbers. Both line and column are 1-based; columns count
//! characters, not bytes, so multi-byte input (Turkish prompts in
//! particular) reports the column an editor would show.
//!
//! Conversion is O(log n) per lookup: a newline-offset index is built once
//! per document and binary-searched per node.

use std::fmt;

/// A 1-based line:column position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Fast conversion from byte offsets to line/column positions.
pub struct SourceMap<'a> {
    source: &'a str,
    /// Byte offsets where each line starts.
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a 1-based line/column position.
    ///
    /// Offsets past the end of the source clamp to the final position.
    pub fn position(&self, byte_offset: usize) -> Position {
        let offset = byte_offset.min(self.source.len());
        let line_idx = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);
        let line_start = self.line_starts[line_idx];
        let column = self.source[line_start..]
            .char_indices()
            .take_while(|(idx, _)| line_start + idx < offset)
            .count();
        Position::new(line_idx + 1, column + 1)
    }

    /// Total number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the given 1-based line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|idx| self.line_starts.get(idx).copied())
    }
}
