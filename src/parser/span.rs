//! Token positions, so `blocks check` can point at the text that failed.

use std::fmt;

/// Where a token starts: byte offset into the script plus 1-based line
/// and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    /// First column of the line starting at byte `offset`.
    pub(crate) fn line_start(offset: usize, line: u32) -> Self {
        Self::new(offset, line, 1)
    }

    /// The location just past `text`, which must not contain a newline.
    pub(crate) fn advance(self, text: &str) -> Self {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        Self {
            offset: self.offset + text.len(),
            line: self.line,
            column: self.column.saturating_add(chars),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The bytes a token covers on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Location,
    pub len: usize,
}

impl Span {
    pub fn new(start: Location, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset one past the token.
    pub fn end_offset(&self) -> usize {
        self.start.offset + self.len
    }
}

/// A parsed value tagged with the token it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}
