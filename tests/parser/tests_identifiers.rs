//! Identifier table tests.

use std::time::{Duration, Instant};

use crate::helpers::assertions::*;
use crate::helpers::grammars::*;
use uld::Span;
use uld::semantic::ErrorCode;

// =============================================================================
// DECLARATIONS AND USAGES
// =============================================================================

#[test]
fn test_declaration_and_usages() {
    let result = parse("Program p\nvar x = 0;\nx print;\nx print;");

    assert!(result.finished());
    assert_no_diagnostics(&result);
    assert_eq!(result.identifiers().len(), 1);

    let x = identifier(&result, "x");
    assert_eq!(x.declaration.as_ref().unwrap().span(), Span::from_coords(1, 4, 1, 5));
    assert_eq!(x.implementation.as_ref().unwrap().span(), Span::from_coords(1, 4, 1, 5));
    assert!(x.definition.is_none());
    assert_eq!(
        reference_spans(&result, "x"),
        vec![
            Span::from_coords(1, 4, 1, 5),
            Span::from_coords(2, 0, 2, 1),
            Span::from_coords(3, 0, 3, 1),
        ]
    );
}

#[test]
fn test_use_before_declaration_is_not_an_error() {
    let result = parse("Program p\nx print;\nvar x = 0;");

    assert_no_diagnostics(&result);
    let x = identifier(&result, "x");
    assert_eq!(x.declaration.as_ref().unwrap().span(), Span::from_coords(2, 4, 2, 5));
    assert_eq!(x.references.len(), 2);
}

#[test]
fn test_identifiers_in_order_of_first_appearance() {
    let result = parse("Program p\nb print;\nvar a = 1;\nvar b = 2;");

    let names: Vec<&str> = result.identifiers().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_keyword_text_as_identifier_name() {
    let result = parse("Program p\nvar var = 0;\nvar print;");

    assert!(result.finished());
    assert_no_diagnostics(&result);
    assert_eq!(
        reference_spans(&result, "var"),
        vec![Span::from_coords(1, 4, 1, 7), Span::from_coords(2, 0, 2, 3)]
    );
}

#[test]
fn test_unicode_identifier_counts_characters() {
    let result = parse("Program p\nvar größe = 1;\ngröße print;");

    assert_no_diagnostics(&result);
    assert_eq!(
        reference_spans(&result, "größe"),
        vec![Span::from_coords(1, 4, 1, 9), Span::from_coords(2, 0, 2, 5)]
    );
}

#[test]
fn test_comment_after_name_not_in_range() {
    let result = parse("Program p\nvar x /* the x */ = 0;");

    assert!(result.finished());
    assert_eq!(reference_spans(&result, "x"), vec![Span::from_coords(1, 4, 1, 5)]);
    assert_eq!(result.comments().len(), 1);
}

// =============================================================================
// DUPLICATE SITES
// =============================================================================

#[test]
fn test_duplicate_declaration() {
    let result = parse("Program p\nvar x = 0;\nvar x = 1;");

    assert_codes(&result, &[ErrorCode::E0201, ErrorCode::E0203]);

    let declared = diagnostic_with_code(&result, ErrorCode::E0201);
    assert_eq!(declared.message, "x is already declared");
    assert_eq!(declared.span, Span::from_coords(2, 4, 2, 5));
    assert_eq!(declared.related.len(), 1);
    assert_eq!(declared.related[0].message, "Declaration of x");
    assert_eq!(declared.related[0].location.span, Span::from_coords(1, 4, 1, 5));

    let implemented = diagnostic_with_code(&result, ErrorCode::E0203);
    assert_eq!(implemented.message, "x is already implemented");

    // The first site is kept; the duplicate still counts as a reference
    let x = identifier(&result, "x");
    assert_eq!(x.declaration.as_ref().unwrap().span(), Span::from_coords(1, 4, 1, 5));
    assert_eq!(x.references.len(), 2);
}

#[test]
fn test_distinct_names_do_not_conflict() {
    let result = parse("Program p\nvar x = 0;\nvar y = 1;");

    assert_no_diagnostics(&result);
    assert_eq!(result.identifiers().len(), 2);
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_reparse_gives_identical_result() {
    let source = "Program p\nvar x = 0;\nvar x = 1;\ny print;";
    let first = parse(source);
    let second = parse(source);

    assert_eq!(
        first.identifiers().collect::<Vec<_>>(),
        second.identifiers().collect::<Vec<_>>()
    );
    assert_eq!(first.diagnostics(), second.diagnostics());
    assert_eq!(first.finished(), second.finished());
}

// =============================================================================
// LARGE DOCUMENTS
// =============================================================================

#[test]
fn test_large_document_with_shared_name() {
    let mut source = String::from("Program p\nvar x = 0;\n");
    for i in 0..20_000 {
        let line = match i % 10 {
            9 => format!("var x = {i};\n"),
            n if n % 2 == 0 => format!("var v{i} = {i};\n"),
            _ => "x print;\n".to_string(),
        };
        source.push_str(&line);
    }

    let started = Instant::now();
    let result = parse(&source);
    let elapsed = started.elapsed();

    assert!(result.finished());
    assert_eq!(result.identifiers().len(), 10_001);
    assert_eq!(identifier(&result, "x").references.len(), 10_001);
    assert_eq!(result.diagnostics().len(), 4_000);
    assert!(elapsed < Duration::from_secs(30), "parse took {elapsed:?}");
}
