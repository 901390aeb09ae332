//! Terminal symbols: the parts of a grammar that match text directly.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use smol_str::SmolStr;

use super::error::GrammarError;
use crate::base::{is_word_character, is_word_start};

/// Caller-supplied terminal predicate over candidate text.
pub type TerminalPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// How a terminal decides whether candidate text matches.
#[derive(Clone)]
pub enum TerminalKind {
    /// Exactly this text.
    Literal(SmolStr),
    /// An anchored regular expression; the greedy prefix match is taken.
    Pattern(Regex),
    /// A Unicode identifier word (XID start followed by XID continue).
    Identifier,
    /// Any caller-defined predicate; the longest accepted prefix is taken.
    Predicate(TerminalPredicate),
}

impl fmt::Debug for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Identifier => f.write_str("Identifier"),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A grammar symbol matching text.
///
/// A terminal needs at least [`min_chars`](Terminal::min_chars) characters of
/// remaining input on the current line before it is tried; with less input at
/// the end of the document it becomes the completion frontier and offers its
/// [`possible_content`](Terminal::possible_content).
#[derive(Debug, Clone)]
pub struct Terminal {
    kind: TerminalKind,
    min_chars: usize,
    possible_content: Vec<SmolStr>,
}

impl Terminal {
    /// A keyword or punctuation terminal.
    pub fn literal(text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        Self {
            min_chars: text.chars().count(),
            possible_content: vec![text.clone()],
            kind: TerminalKind::Literal(text),
        }
    }

    /// A regular-expression terminal, anchored at the current position.
    pub fn pattern(pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|err| {
            GrammarError::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(Self {
            kind: TerminalKind::Pattern(regex),
            min_chars: 1,
            possible_content: Vec::new(),
        })
    }

    /// A Unicode identifier terminal.
    pub fn identifier() -> Self {
        Self {
            kind: TerminalKind::Identifier,
            min_chars: 1,
            possible_content: Vec::new(),
        }
    }

    /// A terminal driven by an arbitrary predicate.
    pub fn predicate<F>(min_chars: usize, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: TerminalKind::Predicate(Arc::new(predicate)),
            min_chars,
            possible_content: Vec::new(),
        }
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_possible_content<I, S>(mut self, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.possible_content = content.into_iter().map(Into::into).collect();
        self
    }

    pub fn kind(&self) -> &TerminalKind {
        &self.kind
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Literal suggestions offered when this terminal is the parse frontier
    pub fn possible_content(&self) -> &[SmolStr] {
        &self.possible_content
    }

    /// Whether the whole of `candidate` is accepted by this terminal
    pub fn try_parse(&self, candidate: &str) -> bool {
        candidate.chars().count() >= self.min_chars
            && self.prefix_lengths(candidate).any(|len| len == candidate.len())
    }

    /// Number of characters of `text` this terminal consumes, if it matches.
    ///
    /// Only prefixes of at least `min_chars` characters count.
    pub fn match_prefix(&self, text: &str) -> Option<usize> {
        let bytes = self.prefix_lengths(text).max()?;
        let chars = text[..bytes].chars().count();
        (chars >= self.min_chars).then_some(chars)
    }

    /// Byte lengths of accepted prefixes of `text`
    fn prefix_lengths<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = usize> + 't> {
        match &self.kind {
            TerminalKind::Literal(literal) => {
                Box::new(text.starts_with(literal.as_str()).then_some(literal.len()).into_iter())
            }
            TerminalKind::Pattern(regex) => Box::new(regex.find(text).map(|m| m.end()).into_iter()),
            TerminalKind::Identifier => {
                let mut chars = text.char_indices();
                let len = match chars.next() {
                    Some((_, c)) if is_word_start(c) => chars
                        .find(|(_, c)| !is_word_character(*c))
                        .map_or(text.len(), |(offset, _)| offset),
                    _ => return Box::new(std::iter::empty()),
                };
                Box::new(std::iter::once(len))
            }
            TerminalKind::Predicate(predicate) => Box::new(
                text.char_indices()
                    .map(|(offset, c)| offset + c.len_utf8())
                    .chain(std::iter::once(0))
                    .filter(move |&end| predicate(&text[..end])),
            ),
        }
    }
}
