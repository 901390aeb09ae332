//! Input text snapshots.
//!
//! A [`SourceText`] is the immutable, line-structured copy of a document that a
//! single parse run works on. Positions address characters, not bytes; each
//! line keeps a table of character boundaries so slicing is O(1).

use super::position::Position;

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a character may start a word (identifier).
#[inline]
pub fn is_word_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Access to the text a parse run works on.
///
/// The action interpreter uses this to read marked spans; the caller owns the
/// canonical text storage.
pub trait TextSource {
    /// Text from `start` up to (excluding) `end`, lines joined with `'\n'`.
    ///
    /// Returns an empty string when `end` is not after `start`.
    fn text_between(&self, start: Position, end: Position) -> String;
}

#[derive(Debug, Clone)]
struct Line {
    text: String,
    /// Byte offset of every character, plus the line length as the last entry
    boundaries: Vec<usize>,
}

impl Line {
    fn new(text: String) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn byte_offset(&self, character: usize) -> usize {
        self.boundaries[character.min(self.char_len())]
    }

    fn slice(&self, from: usize, to: usize) -> &str {
        let from = self.byte_offset(from);
        let to = self.byte_offset(to).max(from);
        &self.text[from..to]
    }
}

/// An ordered sequence of lines; line-break structure is preserved.
#[derive(Debug, Clone)]
pub struct SourceText {
    lines: Vec<Line>,
}

impl SourceText {
    /// Build from already split lines. An empty sequence is one empty line.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<Line> = lines.into_iter().map(|l| Line::new(l.into())).collect();
        if lines.is_empty() {
            lines.push(Line::new(String::new()));
        }
        Self { lines }
    }

    /// Split `text` on `'\n'`, dropping a trailing `'\r'` from each line.
    pub fn from_text(text: &str) -> Self {
        Self::new(
            text.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()),
        )
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|l| l.text.as_str())
    }

    /// Number of characters on `line` (0 for lines past the end)
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, Line::char_len)
    }

    pub fn is_last_line(&self, line: usize) -> bool {
        line + 1 >= self.lines.len()
    }

    /// The text from `position` to the end of its line
    pub fn rest_of_line(&self, position: Position) -> &str {
        match self.lines.get(position.line) {
            Some(line) => line.slice(position.character, line.char_len()),
            None => "",
        }
    }

    /// Position just after the last character of the input
    pub fn end(&self) -> Position {
        let last = self.lines.len() - 1;
        Position::new(last, self.line_len(last))
    }

    pub fn is_end(&self, position: Position) -> bool {
        position >= self.end()
    }

    /// The input cut off at `position`, as seen by a completion request there
    pub fn truncated(&self, position: Position) -> SourceText {
        let last = position.line.min(self.lines.len() - 1);
        let mut lines: Vec<Line> = self.lines[..last].to_vec();
        let cut = self.lines[last].slice(0, position.character);
        lines.push(Line::new(cut.to_string()));
        Self { lines }
    }

    /// All lines joined with `'\n'`
    pub fn to_text(&self) -> String {
        self.text_between(Position::default(), self.end())
    }
}

impl TextSource for SourceText {
    fn text_between(&self, start: Position, end: Position) -> String {
        if end <= start {
            return String::new();
        }

        let mut text = String::new();
        for index in start.line..=end.line.min(self.lines.len().saturating_sub(1)) {
            let line = &self.lines[index];
            let from = if index == start.line { start.character } else { 0 };
            let to = if index == end.line {
                end.character
            } else {
                line.char_len()
            };
            if index != start.line {
                text.push('\n');
            }
            text.push_str(line.slice(from, to));
        }
        text
    }
}
