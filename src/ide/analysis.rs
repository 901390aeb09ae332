//! AnalysisHost and Analysis: document state management for IDE features.
//!
//! The `AnalysisHost` owns the open documents and their cached parse results
//! and provides `Analysis` snapshots for querying.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(grammar);
//!
//! // Apply document changes
//! host.set_document("file:///a.txt", "var x = 0;");
//!
//! // Get a snapshot for queries
//! let analysis = host.analysis();
//! let refs = analysis.references_at("file:///a.txt", Position::new(0, 4));
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::{GotoTarget, SiteKind};
use crate::base::{Location, Position, SourceText};
use crate::grammar::{Grammar, GrammarError};
use crate::parser::{ParseOptions, ParseResult, Parser};
use crate::semantic::{CompletionItem, Diagnostic, FoldingRange};

#[derive(Debug)]
struct Document {
    text: SourceText,
    /// `None` until parsed after the last change
    parsed: Option<Result<ParseResult, GrammarError>>,
}

/// Owns all open documents for one language.
///
/// Apply changes via `set_document()` and `remove_document()`, then get a
/// consistent snapshot via `analysis()`.
#[derive(Debug)]
pub struct AnalysisHost {
    parser: Parser,
    documents: IndexMap<SmolStr, Document, FxBuildHasher>,
}

impl AnalysisHost {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self::with_options(grammar, ParseOptions::default())
    }

    pub fn with_options(grammar: Arc<Grammar>, options: ParseOptions) -> Self {
        Self {
            parser: Parser::new(grammar).with_options(options),
            documents: IndexMap::default(),
        }
    }

    pub fn grammar(&self) -> &Arc<Grammar> {
        self.parser.grammar()
    }

    /// Set the text of a document. It is re-parsed on the next snapshot.
    pub fn set_document(&mut self, uri: &str, text: &str) {
        self.documents.insert(
            SmolStr::new(uri),
            Document {
                text: SourceText::from_text(text),
                parsed: None,
            },
        );
    }

    pub fn remove_document(&mut self, uri: &str) -> bool {
        self.documents.shift_remove(uri).is_some()
    }

    pub fn has_document(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Parse every document changed since it was last parsed, in parallel.
    pub fn parse_all(&mut self) {
        let parser = &self.parser;
        let stale: Vec<(&SmolStr, &mut Document)> = self
            .documents
            .iter_mut()
            .filter(|(_, document)| document.parsed.is_none())
            .collect();
        if stale.is_empty() {
            return;
        }

        tracing::debug!(documents = stale.len(), "parsing changed documents");
        stale.into_par_iter().for_each(|(uri, document)| {
            document.parsed = Some(parser.parse_text(uri, &document.text));
        });
    }

    /// Get a consistent snapshot for querying.
    ///
    /// Changed documents are parsed first.
    pub fn analysis(&mut self) -> Analysis<'_> {
        self.parse_all();
        Analysis { host: self }
    }
}

/// An immutable snapshot of the analysis state.
pub struct Analysis<'a> {
    host: &'a AnalysisHost,
}

impl<'a> Analysis<'a> {
    /// The cached parse outcome of a document
    pub fn parse_result(&self, uri: &str) -> Option<&'a Result<ParseResult, GrammarError>> {
        self.host.documents.get(uri)?.parsed.as_ref()
    }

    /// The grammar error that stopped a document from parsing, if any
    pub fn grammar_error(&self, uri: &str) -> Option<&'a GrammarError> {
        self.parse_result(uri)?.as_ref().err()
    }

    /// Successfully parsed documents, in the order they were opened
    pub fn results(&self) -> impl Iterator<Item = &'a ParseResult> + Clone + 'a {
        self.host
            .documents
            .values()
            .filter_map(|document| document.parsed.as_ref()?.as_ref().ok())
    }

    fn result(&self, uri: &str) -> Option<&'a ParseResult> {
        self.parse_result(uri)?.as_ref().ok()
    }

    pub fn diagnostics(&self, uri: &str) -> &'a [Diagnostic] {
        self.result(uri)
            .map(ParseResult::diagnostics)
            .unwrap_or_default()
    }

    /// Completion items at `position`.
    ///
    /// At the end of the document the cached result is used; anywhere else
    /// the text up to `position` is parsed on its own. Unknown documents and
    /// grammar errors fall back to the keyword list.
    pub fn completions_at(&self, uri: &str, position: Position) -> Vec<CompletionItem> {
        let grammar = self.host.grammar();
        let Some(document) = self.host.documents.get(uri) else {
            return super::keyword_completions(grammar);
        };

        if position == document.text.end() {
            return match &document.parsed {
                Some(Ok(result)) => super::completions(grammar, result),
                _ => super::keyword_completions(grammar),
            };
        }

        let prefix = document.text.truncated(position);
        match self.host.parser.parse_text(uri, &prefix) {
            Ok(result) => super::completions(grammar, &result),
            Err(_) => super::keyword_completions(grammar),
        }
    }

    /// References of the identifier at `position`, across all documents
    pub fn references_at(&self, uri: &str, position: Position) -> Vec<Location> {
        super::find_references_in(self.results(), uri, position)
    }

    pub fn declaration_at(&self, uri: &str, position: Position) -> Option<GotoTarget> {
        super::goto_site_in(self.results(), uri, position, SiteKind::Declaration)
    }

    pub fn definition_at(&self, uri: &str, position: Position) -> Option<GotoTarget> {
        super::goto_site_in(self.results(), uri, position, SiteKind::Definition)
    }

    /// Implementation of the identifier at `position`, across all documents
    pub fn implementation_at(&self, uri: &str, position: Position) -> Option<GotoTarget> {
        super::goto_implementation_in(self.results(), uri, position)
    }

    pub fn folding_ranges(&self, uri: &str) -> Vec<FoldingRange> {
        self.result(uri)
            .map(|result| super::folding_ranges(result, self.host.parser.options().fold_comments))
            .unwrap_or_default()
    }
}
