//! Parse state threaded through rule application.
//!
//! A [`ParseState`] is a value. Every collection in it is persistent
//! (`im` vectors and maps, or the linked [`FoldingStack`]), so cloning a
//! state is O(1) and an update copies only the path it touches. A clone
//! handed to one alternative never observes changes made by another.

use std::sync::Arc;

use im::{HashMap, Vector};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::trivia::Comment;
use crate::base::{Position, Span};
use crate::semantic::{CompletionKind, Diagnostic, Identifier, IdentifierTypes};

// ============================================================================
// IDENTIFIER TABLE
// ============================================================================

/// Identifiers keyed by exact name, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable {
    index: HashMap<SmolStr, usize>,
    entries: Vector<Identifier>,
}

impl IdentifierTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Identifier> {
        self.index.get(name).and_then(|&slot| self.entries.get(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.entries.iter()
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Identifier> {
        let slot = *self.index.get(name)?;
        self.entries.get_mut(slot)
    }

    fn insert(&mut self, identifier: Identifier) {
        if let Some(&slot) = self.index.get(identifier.name.as_str()) {
            self.entries[slot] = identifier;
            return;
        }
        self.index.insert(identifier.name.clone(), self.entries.len());
        self.entries.push_back(identifier);
    }
}

// ============================================================================
// FOLDING STACK
// ============================================================================

#[derive(Debug)]
struct Frame {
    start: Position,
    below: FoldingStack,
}

/// Persistent LIFO stack of open folding starts.
///
/// Push and pop share the untouched tail with every other copy.
#[derive(Debug, Clone, Default)]
pub struct FoldingStack(Option<Arc<Frame>>);

impl FoldingStack {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn push(&self, start: Position) -> Self {
        Self(Some(Arc::new(Frame {
            start,
            below: self.clone(),
        })))
    }

    /// The top start and the stack below it
    pub fn pop(&self) -> Option<(Position, FoldingStack)> {
        self.0
            .as_ref()
            .map(|frame| (frame.start, frame.below.clone()))
    }

    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut current = &self.0;
        while let Some(frame) = current {
            len += 1;
            current = &frame.below.0;
        }
        len
    }
}

// ============================================================================
// VALUE STORE
// ============================================================================

/// In-flight action data, consumed by the next identifier or folding end.
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    pub next_kind: Option<CompletionKind>,
    pub next_types: Option<IdentifierTypes>,
    pub is_declaration: bool,
    pub is_definition: bool,
    pub is_implementation: bool,
    pub folding_starts: FoldingStack,
    pub folding_ranges: Vector<Span>,
}

// ============================================================================
// PARSE STATE
// ============================================================================

/// An immutable snapshot of parsing progress.
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    pub(crate) position: Position,
    /// End of the last consumed token, before any skipped trivia
    pub(crate) pre_comment_position: Position,
    /// Open two-phase markers, keyed by action command
    pub(crate) markers: Arc<FxHashMap<SmolStr, Position>>,
    pub(crate) values: ValueStore,
    pub(crate) identifiers: IdentifierTable,
    pub(crate) errors: Vector<Diagnostic>,
    pub(crate) comments: Vector<Comment>,
    /// Suggestions of optional alternatives skipped at the end of input
    pub(crate) skipped_candidates: Vector<SmolStr>,
}

impl ParseState {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn pre_comment_position(&self) -> Position {
        self.pre_comment_position
    }

    pub fn marker(&self, command: &str) -> Option<Position> {
        self.markers.get(command).copied()
    }

    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    pub fn identifiers(&self) -> &IdentifierTable {
        &self.identifiers
    }

    pub fn identifier(&self, name: &str) -> Option<&Identifier> {
        self.identifiers.get(name)
    }

    pub fn errors(&self) -> &Vector<Diagnostic> {
        &self.errors
    }

    pub fn comments(&self) -> &Vector<Comment> {
        &self.comments
    }

    pub fn skipped_candidates(&self) -> &Vector<SmolStr> {
        &self.skipped_candidates
    }

    // ------------------------------------------------------------------------
    // Updates
    // ------------------------------------------------------------------------

    pub(crate) fn open_marker(&mut self, command: &str) {
        let position = self.position;
        Arc::make_mut(&mut self.markers).insert(command.into(), position);
    }

    pub(crate) fn close_marker(&mut self, command: &str) -> Option<Position> {
        if !self.markers.contains_key(command) {
            return None;
        }
        Arc::make_mut(&mut self.markers).remove(command)
    }

    pub(crate) fn push_error(&mut self, diagnostic: Diagnostic) {
        self.errors.push_back(diagnostic);
    }

    pub(crate) fn push_comment(&mut self, comment: Comment) {
        self.comments.push_back(comment);
    }

    pub(crate) fn push_folding_range(&mut self, span: Span) {
        self.values.folding_ranges.push_back(span);
    }

    /// Mutable access to the identifier entry for `name`, if recorded
    pub(crate) fn identifier_mut(&mut self, name: &str) -> Option<&mut Identifier> {
        self.identifiers.get_mut(name)
    }

    pub(crate) fn insert_identifier(&mut self, identifier: Identifier) {
        self.identifiers.insert(identifier);
    }

    /// Move past consumed input to `end`
    pub(crate) fn advance_to(&mut self, end: Position) {
        self.position = end;
        self.pre_comment_position = end;
        if !self.skipped_candidates.is_empty() {
            self.skipped_candidates = Vector::new();
        }
    }

    pub(crate) fn remember_skipped<'s>(&mut self, candidates: impl IntoIterator<Item = &'s SmolStr>) {
        for candidate in candidates {
            if !self.skipped_candidates.iter().any(|skipped| skipped == candidate) {
                self.skipped_candidates.push_back(candidate.clone());
            }
        }
    }
}
