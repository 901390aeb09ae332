//! Whitespace and comment skipping.
//!
//! Trivia is skipped once at the start of input and after every consumed
//! terminal. Skipping moves `position` but leaves `pre_comment_position` at
//! the end of the last token, so ranges ending "now" never include comments.

use crate::base::{Position, SourceText, Span};
use crate::grammar::{CommentRule, CommentRules};

use super::options::ParseOptions;
use super::state::ParseState;

/// A comment skipped during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// From the start delimiter to after the end delimiter
    pub span: Span,
    pub documentation: bool,
    /// The body without delimiters, prefixed by the rule's replacement
    pub text: String,
}

/// Advance `state` past whitespace, line breaks and comments.
///
/// Line breaks are always trivia; other whitespace only when
/// `options.skip_whitespace` is set.
pub(crate) fn skip_trivia(
    text: &SourceText,
    rules: &CommentRules,
    options: &ParseOptions,
    state: &mut ParseState,
) {
    let mut position = state.position;
    loop {
        position = skip_blank(text, options, position);
        match read_comment(text, rules, position) {
            Some(comment) => {
                position = comment.span.end;
                state.push_comment(comment);
            }
            None => break,
        }
    }
    state.position = position;
}

fn skip_blank(text: &SourceText, options: &ParseOptions, mut position: Position) -> Position {
    loop {
        let rest = text.rest_of_line(position);
        if rest.is_empty() {
            if text.is_last_line(position.line) {
                return position;
            }
            position = Position::new(position.line + 1, 0);
            continue;
        }
        if !options.skip_whitespace {
            return position;
        }
        let blank = rest.chars().take_while(|c| c.is_whitespace()).count();
        if blank == 0 {
            return position;
        }
        position = position.advanced(blank);
    }
}

fn read_comment(text: &SourceText, rules: &CommentRules, start: Position) -> Option<Comment> {
    let rest = text.rest_of_line(start);
    let (rule, documentation) = rules
        .iter()
        .find(|(rule, _)| !rule.start().is_empty() && rest.starts_with(rule.start()))?;

    let body_start = start.advanced(rule.start().chars().count());
    let (body, end) = if rule.is_line_comment() {
        let body = text.rest_of_line(body_start).to_string();
        (body, Position::new(start.line, text.line_len(start.line)))
    } else {
        find_block_end(text, rule, body_start)
    };

    let content = match rule.replacement() {
        Some(replacement) => format!("{replacement}{body}"),
        None => body,
    };

    Some(Comment {
        span: Span::new(start, end),
        documentation,
        text: content,
    })
}

/// Body text and end position of a delimited comment.
///
/// An unterminated comment runs to the end of input.
fn find_block_end(text: &SourceText, rule: &CommentRule, body_start: Position) -> (String, Position) {
    let mut body = String::new();
    let mut from = body_start;
    loop {
        let rest = text.rest_of_line(from);
        if let Some(offset) = rest.find(rule.end()) {
            let inner = &rest[..offset];
            body.push_str(inner);
            let end = from.advanced(inner.chars().count() + rule.end().chars().count());
            return (body, end);
        }
        body.push_str(rest);
        if text.is_last_line(from.line) {
            return (body, from.advanced(rest.chars().count()));
        }
        body.push('\n');
        from = Position::new(from.line + 1, 0);
    }
}
