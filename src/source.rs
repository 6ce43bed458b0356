//! Conversion from `(line, code-unit column)` to global character offsets.

use crate::error::{Error, Result};
use crate::node::Position;

/// Line table of one source text.
///
/// Offsets are counted in characters (code points), while the positions
/// reported by parsers and tokenizers count UTF-8 bytes within a line.
#[derive(Debug, Clone)]
pub struct SourceIndex<'a> {
    /// Lines without their terminating `\n`.
    lines: Vec<&'a str>,
    /// Character count of all lines before each line, newlines included.
    prefix: Vec<usize>,
    len: usize,
}

impl<'a> SourceIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let lines: Vec<&str> = source.split('\n').collect();
        let mut prefix = Vec::with_capacity(lines.len());
        let mut total = 0;
        for line in &lines {
            prefix.push(total);
            total += line.chars().count() + 1;
        }

        Self {
            lines,
            prefix,
            len: source.chars().count(),
        }
    }

    /// Length of the source in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Global character offset of `position`.
    ///
    /// A column that cuts a multi-byte character counts that character
    /// whole. A column past the end of its line lands on the newline.
    pub fn offset_of(&self, position: Position) -> Result<usize> {
        let Position { line, column } = position;
        if line == 0 {
            return Err(Error::InvalidPosition { line, column });
        }
        let text = self.lines.get(line - 1).ok_or(Error::LineOutOfRange {
            line,
            lines: self.lines.len(),
        })?;

        let corrected = if column <= text.len() {
            text.char_indices().take_while(|(i, _)| *i < column).count()
        } else {
            text.chars().count() + 1
        };

        Ok((self.prefix[line - 1] + corrected).min(self.len))
    }
}
