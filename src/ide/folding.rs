//! Folding ranges implementation.

use crate::parser::ParseResult;
use crate::semantic::FoldingRange;

/// Folding ranges of a document, ordered by start position.
///
/// Structural regions come from the grammar's `folding` actions. With
/// `include_comments`, every comment spanning several lines folds too.
pub fn folding_ranges(result: &ParseResult, include_comments: bool) -> Vec<FoldingRange> {
    let regions = result.folding_ranges().iter().copied().map(FoldingRange::region);
    let comments = result
        .comments()
        .iter()
        .filter(|comment| include_comments && comment.span.is_multiline())
        .map(|comment| FoldingRange::comment(comment.span));

    let mut ranges: Vec<FoldingRange> = regions.chain(comments).collect();
    ranges.sort_by_key(|range| range.span.start);
    ranges
}
