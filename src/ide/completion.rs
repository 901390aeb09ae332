//! Completion suggestions implementation.

use crate::grammar::Grammar;
use crate::parser::ParseResult;
use crate::semantic::CompletionItem;

/// Completion items for the end of the parsed text.
///
/// An unfinished parse offers its continuations; otherwise every keyword of
/// the grammar is suggested.
pub fn completions(grammar: &Grammar, result: &ParseResult) -> Vec<CompletionItem> {
    if !result.finished() && !result.possible_continuations().is_empty() {
        return result.possible_continuations().to_vec();
    }
    keyword_completions(grammar)
}

/// Every literal the grammar knows, as keyword items.
pub fn keyword_completions(grammar: &Grammar) -> Vec<CompletionItem> {
    grammar
        .keywords()
        .iter()
        .cloned()
        .map(CompletionItem::keyword)
        .collect()
}
