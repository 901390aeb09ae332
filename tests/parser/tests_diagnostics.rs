//! Parse failure diagnostic tests.

use rstest::rstest;

use crate::helpers::assertions::*;
use crate::helpers::grammars::*;
use uld::semantic::{ErrorCode, Severity};
use uld::{ParseOptions, Parser, Span};

#[test]
fn test_no_start_rule_accepts_input() {
    let result = parse("Module m");

    assert!(!result.finished());
    assert!(result.possible_continuations().is_empty());
    assert_codes(&result, &[ErrorCode::E0101]);

    let diagnostic = &result.diagnostics()[0];
    assert_eq!(diagnostic.span, Span::from_coords(0, 0, 0, 8));
    assert_eq!(diagnostic.message, "unexpected input, expected one of: `Program`");
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.uri, URI);
}

#[test]
fn test_trailing_input() {
    let result = parse("Program p\nvar x = 0;\n}");

    assert_codes(&result, &[ErrorCode::E0102]);
    let diagnostic = &result.diagnostics()[0];
    assert_eq!(diagnostic.span, Span::from_coords(2, 0, 2, 1));
    assert_eq!(
        diagnostic.message,
        "unexpected trailing input, expected one of: `var`, `print_stmt`"
    );
}

#[test]
fn test_trailing_span_starts_where_start_rule_stopped() {
    // The start rule stops before `var`; the furthest failure is at `;`
    let result = parse("Program p\nvar x = ;");

    assert_eq!(result.diagnostics().len(), 1);
    let diagnostic = &result.diagnostics()[0];
    assert_eq!(diagnostic.code, ErrorCode::E0102);
    assert_eq!(diagnostic.span, Span::from_coords(1, 0, 1, 9));
    assert_eq!(diagnostic.message, "unexpected trailing input, expected one of: `var_decl`");
}

#[test]
fn test_rejected_span_starts_at_first_token() {
    // Leading trivia is not part of the rejected input
    let result = parse("// header\n  Program 1");

    assert_codes(&result, &[ErrorCode::E0101]);
    let diagnostic = &result.diagnostics()[0];
    assert_eq!(diagnostic.span, Span::from_coords(1, 2, 1, 11));
    assert_eq!(diagnostic.message, "unexpected input, expected one of: `program`");
}

#[test]
fn test_nesting_limit_is_a_diagnostic() {
    let body: String = (0..10).map(|i| format!("var v{i} = {i};\n")).collect();
    let options = ParseOptions {
        max_depth: 8,
        ..ParseOptions::default()
    };
    let parser = Parser::new(var_and_print()).with_options(options);

    let result = parser
        .parse(URI, format!("Program p\n{body}").lines())
        .unwrap();

    assert!(!result.finished());
    assert_codes(&result, &[ErrorCode::E0103]);
    let diagnostic = &result.diagnostics()[0];
    assert_eq!(diagnostic.span, Span::from_coords(4, 0, 10, 11));
    assert_eq!(
        diagnostic.message,
        "input nests deeper than the parser's rule depth limit"
    );
    assert_eq!(result.identifiers().len(), 3);
}

#[test]
fn test_failed_parse_keeps_earlier_identifiers() {
    let result = parse("Program p\nvar x = 0;\nx print;\n}");

    assert_codes(&result, &[ErrorCode::E0102]);
    assert_eq!(identifier(&result, "x").references.len(), 2);
}

#[test]
fn test_semantic_and_parse_diagnostics_together() {
    let result = parse("Program p\nvar x = 0;\nvar x = 1;\n}");

    assert_codes(&result, &[ErrorCode::E0201, ErrorCode::E0203, ErrorCode::E0102]);
}

#[rstest]
#[case("Program p\nvar x = 0;")]
#[case("Program p // name\nvar x = 0; /* value */")]
#[case("/// docs\nProgram p\n\n   x print;")]
fn test_valid_documents_have_no_diagnostics(#[case] source: &str) {
    let result = parse(source);

    assert!(result.finished(), "'{source}' should finish");
    assert_no_diagnostics(&result);
}
