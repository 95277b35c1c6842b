//! Source location spans for diagnostics.

/// A span in the raw input (byte offset start and end).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Location: 1-based input line + span. Used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub span: Span,
}

impl Location {
    pub fn new(line: u32, span: Span) -> Self {
        Self { line, span }
    }
}

