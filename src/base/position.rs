/// Position tracking for parsed documents
///
/// Stores source locations (line/character) of identifier sites, diagnostics
/// and folding ranges for editor features like references, go-to-implementation
/// and problem markers.
use std::fmt;

use smol_str::SmolStr;

/// A position in source code (0-indexed, characters counted per line)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// The position `count` characters further on the same line
    pub fn advanced(self, count: usize) -> Self {
        Self {
            line: self.line,
            character: self.character + count,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// A span representing a range in source code (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/character coordinates
    pub fn from_coords(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_character),
            end: Position::new(end_line, end_character),
        }
    }

    /// Check if a position falls within this span (both ends inclusive)
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.character < self.start.character {
            return false;
        }
        if position.line == self.end.line && position.character > self.end.character {
            return false;
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the span covers more than one line
    pub fn is_multiline(&self) -> bool {
        self.end.line > self.start.line
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A span inside a specific document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub uri: SmolStr,
    pub span: Span,
}

impl Location {
    pub fn new(uri: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            uri: uri.into(),
            span,
        }
    }

    /// Check if this location is in `uri` and covers `position`
    pub fn contains(&self, uri: &str, position: Position) -> bool {
        self.uri == uri && self.span.contains(position)
    }
}
