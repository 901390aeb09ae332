//! Grammar-driven parser.
//!
//! Walks a [`Grammar`] against source text, running the grammar's semantic
//! actions on the way, and produces a [`ParseResult`].
//!
//! ## Architecture
//!
//! ```text
//! SourceText + Grammar
//!     ↓
//! RuleEngine   → applies rules, threads ParseState values
//!     ↓ (on every Action symbol)
//! actions      → markers, identifier table, folding ranges
//!     ↓
//! ParseResult  → finished / continuations / diagnostics / identifiers
//! ```
//!
//! Malformed input is reported as diagnostics in the result. A malformed
//! grammar aborts the run with a [`GrammarError`].

mod actions;
mod engine;
mod options;
mod result;
mod stack;
mod state;
mod trivia;

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{SourceText, Span};
use crate::grammar::{Grammar, GrammarError};
use crate::semantic::{CompletionItem, Diagnostic};

pub use actions::{ParserInfo, execute};
pub use options::ParseOptions;
pub use result::ParseResult;
pub use state::{FoldingStack, IdentifierTable, ParseState, ValueStore};
pub use trivia::Comment;

use engine::{RuleEngine, Verdict};

/// Parses documents of one language.
#[derive(Debug, Clone)]
pub struct Parser {
    grammar: Arc<Grammar>,
    options: ParseOptions,
}

impl Parser {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self {
            grammar,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn grammar(&self) -> &Arc<Grammar> {
        &self.grammar
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a document given as lines.
    pub fn parse<I, S>(&self, uri: &str, lines: I) -> Result<ParseResult, GrammarError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_text(uri, &SourceText::new(lines))
    }

    /// Parse a document snapshot.
    pub fn parse_text(&self, uri: &str, text: &SourceText) -> Result<ParseResult, GrammarError> {
        tracing::debug!(uri, lines = text.line_count(), "parse start");

        let mut engine = RuleEngine::new(&self.grammar, text, uri, &self.options);
        let verdict = engine.run().inspect_err(|err| {
            tracing::warn!(uri, error = %err, "grammar error aborted parse");
        })?;

        let uri = SmolStr::new(uri);
        let result = match verdict {
            Verdict::Finished(state) => ParseResult::from_state(uri, true, Vec::new(), state),
            Verdict::Unfinished(frontier) => {
                let continuations = frontier
                    .candidates
                    .into_iter()
                    .map(CompletionItem::keyword)
                    .collect();
                ParseResult::from_state(uri, false, continuations, frontier.state)
            }
            Verdict::Rejected {
                mut state,
                code,
                from,
                expected,
            } => {
                let message = if expected.is_empty() {
                    code.default_message().to_string()
                } else {
                    let expected: Vec<String> = expected.iter().map(|e| format!("`{e}`")).collect();
                    format!("{}, expected one of: {}", code.default_message(), expected.join(", "))
                };
                let span = Span::new(from, text.end().max(from));
                state.push_error(Diagnostic::error(uri.clone(), span, code, message));
                ParseResult::from_state(uri, false, Vec::new(), state)
            }
        };

        tracing::debug!(
            uri = result.uri(),
            finished = result.finished(),
            identifiers = result.identifiers().len(),
            diagnostics = result.diagnostics().len(),
            "parse finished"
        );
        Ok(result)
    }
}
