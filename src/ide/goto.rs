//! Go-to declaration, definition and implementation.

use crate::base::{Location, Position, Span};
use crate::parser::ParseResult;
use crate::semantic::{Identifier, Reference};

/// A navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The occurrence the request was made on
    pub origin: Span,
    pub target: Location,
}

/// Which site of an identifier to navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteKind {
    Declaration,
    Definition,
    Implementation,
}

impl SiteKind {
    fn select(self, identifier: &Identifier) -> Option<&Reference> {
        match self {
            SiteKind::Declaration => identifier.declaration.as_ref(),
            SiteKind::Definition => identifier.definition.as_ref(),
            SiteKind::Implementation => identifier.implementation.as_ref(),
        }
    }
}

pub fn goto_declaration(result: &ParseResult, position: Position) -> Option<GotoTarget> {
    goto_site_in([result], result.uri(), position, SiteKind::Declaration)
}

pub fn goto_definition(result: &ParseResult, position: Position) -> Option<GotoTarget> {
    goto_site_in([result], result.uri(), position, SiteKind::Definition)
}

pub fn goto_implementation(result: &ParseResult, position: Position) -> Option<GotoTarget> {
    goto_site_in([result], result.uri(), position, SiteKind::Implementation)
}

/// Go to the implementation of the identifier at `position`, in any document.
pub fn goto_implementation_in<'r>(
    documents: impl IntoIterator<Item = &'r ParseResult> + Clone,
    uri: &str,
    position: Position,
) -> Option<GotoTarget> {
    goto_site_in(documents, uri, position, SiteKind::Implementation)
}

/// Go to a site of the identifier at `position` in `uri`.
///
/// Identifiers are matched by exact name. The requesting document is
/// searched first, then the others in order.
pub fn goto_site_in<'r>(
    documents: impl IntoIterator<Item = &'r ParseResult> + Clone,
    uri: &str,
    position: Position,
    kind: SiteKind,
) -> Option<GotoTarget> {
    let origin_document = documents
        .clone()
        .into_iter()
        .find(|document| document.uri() == uri)?;
    let identifier = origin_document.identifier_at(position)?;
    let origin = identifier
        .references
        .iter()
        .chain(identifier.sites())
        .find(|site| site.location.contains(uri, position))?
        .span();

    let site = kind.select(identifier).or_else(|| {
        documents
            .into_iter()
            .filter(|document| document.uri() != uri)
            .filter_map(|document| document.identifier(&identifier.name))
            .find_map(|other| kind.select(other))
    })?;

    Some(GotoTarget {
        origin,
        target: site.location.clone(),
    })
}
