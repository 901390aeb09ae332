//! Action interpreter.
//!
//! Executes the [`Action`] symbols met during rule application. Actions
//! never consume input; they update the in-flight value store, open and
//! close markers, and build the identifier table.
//!
//! Two-phase commands (`identifier` and the marker form of
//! `identifierType`) bracket a span: the first occurrence opens a marker at
//! the current position, the next occurrence of the same command closes it
//! and works on the text between the marker and the pre-comment position.

use super::state::ParseState;
use crate::base::{Location, Position, Span, TextSource};
use crate::grammar::{Action, GrammarError};
use crate::semantic::{
    CompletionKind, Diagnostic, ErrorCode, Identifier, IdentifierTypes, Reference, RelatedInfo,
};

/// What the interpreter may know about the parse besides the state.
#[derive(Clone, Copy)]
pub struct ParserInfo<'a> {
    pub uri: &'a str,
    pub text: &'a dyn TextSource,
}

/// Execute `action` against `state`, returning the next state.
///
/// Malformed actions are grammar errors and abort the parse.
pub fn execute(info: ParserInfo<'_>, state: ParseState, action: &Action) -> Result<ParseState, GrammarError> {
    tracing::trace!(%action, position = %state.position, "execute action");

    match action.command() {
        Action::IDENTIFIER => Ok(two_phase(info, state, action, close_identifier)),
        Action::IDENTIFIER_TYPE => match action.argument(0) {
            Some(Action::ARG_SET) => {
                let ty = action
                    .argument(1)
                    .ok_or_else(|| GrammarError::unsupported_argument(action, "`set <type>`"))?;
                let mut next = state;
                next.values
                    .next_types
                    .get_or_insert_with(IdentifierTypes::default)
                    .insert(ty);
                Ok(next)
            }
            Some(_) => Err(GrammarError::unsupported_argument(action, "no argument or `set <type>`")),
            None => Ok(two_phase(info, state, action, close_identifier_type)),
        },
        Action::IDENTIFIER_KIND => match (action.argument(0), action.argument(1)) {
            (Some(Action::ARG_SET), Some(kind)) => {
                let mut next = state;
                next.values.next_kind = Some(kind.parse::<CompletionKind>()?);
                Ok(next)
            }
            _ => Err(GrammarError::unsupported_argument(action, "`set <kind>`")),
        },
        Action::DECLARATION => {
            let mut next = state;
            next.values.is_declaration = true;
            Ok(next)
        }
        Action::DEFINITION => {
            let mut next = state;
            next.values.is_definition = true;
            Ok(next)
        }
        Action::IMPLEMENTATION => {
            let mut next = state;
            next.values.is_implementation = true;
            Ok(next)
        }
        Action::FOLDING => match action.argument(0) {
            Some(Action::ARG_FOLDING_START) => {
                let mut next = state;
                next.values.folding_starts = next.values.folding_starts.push(next.position);
                Ok(next)
            }
            Some(Action::ARG_FOLDING_END) => {
                let (start, below) = state
                    .values
                    .folding_starts
                    .pop()
                    .ok_or_else(|| GrammarError::UnbalancedFolding(action.to_string()))?;
                let mut next = state;
                next.values.folding_starts = below;
                let end = next.pre_comment_position.max(start);
                next.push_folding_range(Span::new(start, end));
                Ok(next)
            }
            _ => Err(GrammarError::unsupported_argument(action, "`start` or `end`")),
        },
        _ => Err(GrammarError::UnsupportedAction(action.to_string())),
    }
}

/// Open a marker for the action's command, or close it and run `close`.
fn two_phase(
    info: ParserInfo<'_>,
    mut state: ParseState,
    action: &Action,
    close: fn(ParserInfo<'_>, ParseState, Position) -> ParseState,
) -> ParseState {
    match state.close_marker(action.command()) {
        Some(marker) => close(info, state, marker),
        None => {
            state.open_marker(action.command());
            state
        }
    }
}

fn close_identifier_type(info: ParserInfo<'_>, mut state: ParseState, marker: Position) -> ParseState {
    let text = info.text.text_between(marker, state.pre_comment_position);
    let ty = text.trim();
    if !ty.is_empty() {
        state
            .values
            .next_types
            .get_or_insert_with(IdentifierTypes::default)
            .insert(ty);
    }
    state
}

/// Record one occurrence of the identifier bracketed by `marker`.
///
/// In-flight values are consumed whether or not they applied cleanly.
fn close_identifier(info: ParserInfo<'_>, mut state: ParseState, marker: Position) -> ParseState {
    let range = Span::new(marker, state.pre_comment_position.max(marker));
    let text = info.text.text_between(range.start, range.end);
    let name = text.trim();

    let values = std::mem::take(&mut state.values);
    state.values.folding_starts = values.folding_starts;
    state.values.folding_ranges = values.folding_ranges;

    if name.is_empty() {
        return state;
    }

    let location = Location::new(info.uri, range);
    let site = || Reference::new(location.clone());
    let declaration = values.is_declaration.then(site);
    let definition = values.is_definition.then(site);
    let implementation = values.is_implementation.then(site);
    let types = values.next_types.unwrap_or_default();

    let Some(identifier) = state.identifier_mut(name) else {
        let mut identifier = Identifier::new(name);
        identifier.references.push_back(site());
        identifier.types = types;
        identifier.kind = values.next_kind;
        identifier.declaration = declaration;
        identifier.definition = definition;
        identifier.implementation = implementation;
        tracing::trace!(name, %range, "new identifier");
        state.insert_identifier(identifier);
        return state;
    };

    identifier.references.push_back(site());
    let mut errors = Vec::new();
    let error = |code: ErrorCode, message: String| Diagnostic::error(info.uri, range, code, message);

    if let Some(kind) = values.next_kind {
        match identifier.kind {
            None => identifier.kind = Some(kind),
            Some(existing) if existing != kind => errors.push(error(
                ErrorCode::E0301,
                format!("Expected {kind}, but found {existing}"),
            )),
            Some(_) => {}
        }
    }

    if let Some(declaration) = declaration {
        match &identifier.declaration {
            None => identifier.declaration = Some(declaration),
            Some(existing) => errors.push(
                error(ErrorCode::E0201, format!("{name} is already declared"))
                    .with_related(RelatedInfo::new(existing.location.clone(), format!("Declaration of {name}"))),
            ),
        }
    }

    if let Some(definition) = definition {
        match &identifier.definition {
            None => identifier.definition = Some(definition),
            Some(existing) => errors.push(
                error(ErrorCode::E0202, format!("{name} is already defined"))
                    .with_related(RelatedInfo::new(existing.location.clone(), format!("Definition of {name}"))),
            ),
        }
    }

    if let Some(implementation) = implementation {
        match &identifier.implementation {
            None => identifier.implementation = Some(implementation),
            Some(_) => errors.push(error(ErrorCode::E0203, format!("{name} is already implemented"))),
        }
    }

    if !types.is_empty() {
        if values.is_declaration {
            identifier.types.extend(&types);
        } else if !identifier.types.is_compatible_with_all_of(&types) {
            errors.push(error(
                ErrorCode::E0302,
                format!(
                    "Identifier with types {types} expected, but {name} has types {}",
                    identifier.types
                ),
            ));
        }
    }

    for diagnostic in errors {
        tracing::trace!(%diagnostic, "identifier diagnostic");
        state.push_error(diagnostic);
    }
    state
}
