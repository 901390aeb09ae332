//! Possible continuation tests.

use rstest::rstest;

use crate::helpers::assertions::*;
use crate::helpers::grammars::*;
use uld::semantic::CompletionKind;
use uld::{Parser, SourceText};

#[rstest]
#[case("", &["Program"])]
#[case("Prog", &["Program"])]
#[case("Program p\nvar x", &["="])]
#[case("Program p\nvar x = 0", &[";"])]
#[case("Program p\nx", &["print"])]
#[case("Program p\nx pr", &["print"])]
#[case("Program p\nv", &["var", "print"])]
fn test_continuations_at_end_of_input(#[case] source: &str, #[case] expected: &[&str]) {
    let result = parse(source);

    assert!(!result.finished(), "'{source}' should be unfinished");
    assert_no_diagnostics(&result);
    assert_eq!(labels(result.possible_continuations()), expected);
}

#[test]
fn test_continuations_are_keywords() {
    let result = parse("Program p\nvar x = 0");

    assert!(
        result
            .possible_continuations()
            .iter()
            .all(|item| item.kind == CompletionKind::Keyword)
    );
}

#[test]
fn test_finished_parse_has_no_continuations() {
    let result = parse("Program p\nvar x = 0;");

    assert!(result.finished());
    assert!(result.possible_continuations().is_empty());
}

#[test]
fn test_trailing_line_break_still_finishes() {
    let text = SourceText::from_text("Program p\nvar x = 0;\n");
    let result = Parser::new(var_and_print()).parse_text(URI, &text).unwrap();

    assert!(result.finished());
    assert_no_diagnostics(&result);
}

#[test]
fn test_frontier_without_suggestions() {
    // An identifier terminal has nothing to offer
    let result = parse("Program");

    assert!(!result.finished());
    assert!(result.possible_continuations().is_empty());
    assert_no_diagnostics(&result);
}

#[test]
fn test_unfinished_parse_keeps_identifiers() {
    let result = parse("Program p\nvar x = 0;\nx print");

    assert!(!result.finished());
    assert_eq!(labels(result.possible_continuations()), vec![";"]);
    assert_eq!(identifier(&result, "x").references.len(), 2);
}
