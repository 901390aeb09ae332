//! Parse results.

use std::sync::Arc;

use smol_str::SmolStr;

use super::state::ParseState;
use super::trivia::Comment;
use crate::base::{Position, Span};
use crate::semantic::{CompletionItem, Diagnostic, Identifier};

/// Everything one parse run learned about a document.
///
/// Built once from the final parse state; immutable afterwards.
#[derive(Clone, Debug)]
pub struct ParseResult {
    uri: SmolStr,
    finished: bool,
    possible_continuations: Vec<CompletionItem>,
    diagnostics: Vec<Diagnostic>,
    identifiers: Vec<Arc<Identifier>>,
    folding_ranges: Vec<Span>,
    comments: Vec<Comment>,
}

impl ParseResult {
    pub(crate) fn from_state(
        uri: SmolStr,
        finished: bool,
        possible_continuations: Vec<CompletionItem>,
        state: ParseState,
    ) -> Self {
        Self {
            uri,
            finished,
            possible_continuations,
            diagnostics: state.errors.into_iter().collect(),
            identifiers: state.identifiers.iter().cloned().map(Arc::new).collect(),
            folding_ranges: state.values.folding_ranges.into_iter().collect(),
            comments: state.comments.into_iter().collect(),
        }
    }

    /// The document this result belongs to
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether a start rule matched the entire input
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Tokens that may come next; empty when finished
    pub fn possible_continuations(&self) -> &[CompletionItem] {
        &self.possible_continuations
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Identifiers in order of first appearance
    pub fn identifiers(&self) -> impl ExactSizeIterator<Item = &Identifier> {
        self.identifiers.iter().map(Arc::as_ref)
    }

    pub fn identifier(&self, name: &str) -> Option<&Identifier> {
        self.identifiers().find(|identifier| identifier.name == name)
    }

    /// The identifier with a site or reference covering `position`.
    ///
    /// Spans include both ends; the first identifier found wins.
    pub fn identifier_at(&self, position: Position) -> Option<&Identifier> {
        self.identifiers()
            .find(|identifier| identifier.is_at(&self.uri, position))
    }

    pub fn folding_ranges(&self) -> &[Span] {
        &self.folding_ranges
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
