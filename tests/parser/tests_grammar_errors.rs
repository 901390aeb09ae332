//! Grammar error tests.
//!
//! Grammar errors abort a parse instead of producing diagnostics.

use std::sync::Arc;

use rstest::rstest;

use crate::helpers::grammars::*;
use uld::grammar::{Grammar, Symbol, Terminal};
use uld::{GrammarError, Parser};

fn number() -> Symbol {
    Terminal::pattern("[0-9]+").unwrap().into()
}

// =============================================================================
// BUILD-TIME VALIDATION
// =============================================================================

#[test]
fn test_no_start_rules() {
    let err = Grammar::builder()
        .rule("a", [Symbol::literal("a")])
        .build()
        .unwrap_err();

    assert_eq!(err, GrammarError::NoStartRules);
}

#[test]
fn test_unknown_start_rule() {
    let err = Grammar::builder()
        .start_rule("main")
        .rule("a", [Symbol::literal("a")])
        .build()
        .unwrap_err();

    assert_eq!(err, GrammarError::unknown_rule("main", "<start>"));
}

#[test]
fn test_unknown_alternative_option() {
    let err = Grammar::builder()
        .start_rule("a")
        .rule("a", [Symbol::one_of(["b", "c"])])
        .rule("b", [Symbol::literal("b")])
        .build()
        .unwrap_err();

    assert_eq!(err, GrammarError::unknown_rule("c", "a"));
}

#[test]
fn test_duplicate_rule() {
    let err = var_and_print_builder()
        .rule("print_stmt", [Symbol::literal("print")])
        .build()
        .unwrap_err();

    assert_eq!(err, GrammarError::DuplicateRule("print_stmt".into()));
}

#[test]
fn test_invalid_pattern() {
    let err = Terminal::pattern("[0-9").unwrap_err();

    assert!(matches!(err, GrammarError::InvalidPattern { ref pattern, .. } if pattern == "[0-9"));
}

// =============================================================================
// PARSE-TIME ERRORS
// =============================================================================

#[test]
fn test_unknown_rule_reached_while_parsing() {
    let grammar = Grammar::builder()
        .start_rule("program")
        .rule("program", [Symbol::literal("go"), Symbol::rule("missing")])
        .build_unchecked()
        .unwrap();
    let parser = Parser::new(Arc::new(grammar));

    // The missing rule is never reached
    let result = parser.parse(URI, ["stop"]).unwrap();
    assert!(!result.diagnostics().is_empty());

    let err = parser.parse(URI, ["go"]).unwrap_err();
    assert_eq!(err, GrammarError::unknown_rule("missing", "program"));
}

#[test]
fn test_direct_left_recursion() {
    let grammar = Grammar::builder()
        .start_rule("expr")
        .rule("expr", [Symbol::rule("expr"), Symbol::literal("+")])
        .build()
        .unwrap();

    let err = Parser::new(Arc::new(grammar)).parse(URI, ["1+"]).unwrap_err();
    assert_eq!(err, GrammarError::LeftRecursion("expr".into()));
}

#[test]
fn test_left_recursion_through_alternative() {
    let grammar = Grammar::builder()
        .start_rule("expr")
        .rule("expr", [Symbol::one_of(["sum", "atom"])])
        .rule("sum", [Symbol::rule("expr"), Symbol::literal("+"), Symbol::rule("atom")])
        .rule("atom", [number()])
        .build()
        .unwrap();

    let err = Parser::new(Arc::new(grammar)).parse(URI, ["1+2"]).unwrap_err();
    assert_eq!(err, GrammarError::LeftRecursion("expr".into()));
}

#[test]
fn test_right_recursion_is_fine() {
    let grammar = Grammar::builder()
        .start_rule("expr")
        .rule("expr", [Symbol::rule("atom"), Symbol::optional(["tail"])])
        .rule("tail", [Symbol::literal("+"), Symbol::rule("expr")])
        .rule("atom", [number()])
        .build()
        .unwrap();

    let result = Parser::new(Arc::new(grammar)).parse(URI, ["1 + 2 + 3"]).unwrap();
    assert!(result.finished());
}

// =============================================================================
// MALFORMED ACTIONS
// =============================================================================

#[rstest]
#[case("frobnicate now", GrammarError::UnsupportedAction("frobnicate now".into()))]
#[case("identifierKind set gadget", GrammarError::UnknownKind("gadget".into()))]
#[case(
    "identifierKind variable",
    GrammarError::unsupported_argument("identifierKind variable", "`set <kind>`")
)]
#[case(
    "identifierType set",
    GrammarError::unsupported_argument("identifierType set", "`set <type>`")
)]
#[case(
    "folding sideways",
    GrammarError::unsupported_argument("folding sideways", "`start` or `end`")
)]
fn test_malformed_action_aborts_parse(#[case] action: &str, #[case] expected: GrammarError) {
    let grammar = Grammar::builder()
        .start_rule("doc")
        .rule("doc", [Symbol::action(action), Symbol::literal("x")])
        .build()
        .unwrap();

    let err = Parser::new(Arc::new(grammar)).parse(URI, ["x"]).unwrap_err();
    assert_eq!(err, expected);
}

#[test]
fn test_kind_names_ignore_case() {
    let grammar = Grammar::builder()
        .start_rule("doc")
        .rule(
            "doc",
            [
                Symbol::action("identifierKind set CLASS"),
                Symbol::action("identifier"),
                Terminal::identifier().into(),
                Symbol::action("identifier"),
            ],
        )
        .build()
        .unwrap();

    let result = Parser::new(Arc::new(grammar)).parse(URI, ["Shape"]).unwrap();
    assert_eq!(
        result.identifier("Shape").and_then(|i| i.kind),
        Some(uld::semantic::CompletionKind::Class)
    );
}
