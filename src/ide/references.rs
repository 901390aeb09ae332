//! Find references implementation.

use crate::base::{Location, Position};
use crate::parser::ParseResult;

/// Locations of every occurrence of the identifier at `position`.
///
/// Empty when no identifier covers the position.
pub fn find_references(result: &ParseResult, position: Position) -> Vec<Location> {
    find_references_in([result], result.uri(), position)
}

/// Find references across several documents.
///
/// The identifier at `position` in `uri` is matched by exact name against
/// the identifiers of every document. Locations follow document order, then
/// order of appearance.
pub fn find_references_in<'r>(
    documents: impl IntoIterator<Item = &'r ParseResult> + Clone,
    uri: &str,
    position: Position,
) -> Vec<Location> {
    let Some(name) = documents
        .clone()
        .into_iter()
        .filter(|document| document.uri() == uri)
        .find_map(|document| document.identifier_at(position))
        .map(|identifier| identifier.name.clone())
    else {
        return Vec::new();
    };

    documents
        .into_iter()
        .filter_map(|document| document.identifier(&name))
        .flat_map(|identifier| identifier.references.iter())
        .map(|reference| reference.location.clone())
        .collect()
}
