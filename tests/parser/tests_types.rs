//! Identifier type and kind tests.

use crate::helpers::assertions::*;
use crate::helpers::grammars::*;
use uld::Span;
use uld::semantic::{CompletionKind, ErrorCode};

#[test]
fn test_declared_type_and_kind() {
    let result = parse_with(typed(), "int a; use a;");

    assert!(result.finished());
    assert_no_diagnostics(&result);

    let a = identifier(&result, "a");
    assert!(a.types.contains("int"));
    assert_eq!(a.types.len(), 1);
    assert_eq!(a.kind, Some(CompletionKind::Variable));
    assert_eq!(a.declaration.as_ref().unwrap().span(), Span::from_coords(0, 4, 0, 5));
}

#[test]
fn test_incompatible_type_reported() {
    let result = parse_with(typed(), "str s; use s;");

    assert_codes(&result, &[ErrorCode::E0302]);
    let diagnostic = diagnostic_with_code(&result, ErrorCode::E0302);
    assert_eq!(
        diagnostic.message,
        "Identifier with types int expected, but s has types str"
    );
    assert_eq!(diagnostic.span, Span::from_coords(0, 11, 0, 12));
}

#[test]
fn test_untyped_identifier_accepts_any_type() {
    let result = parse_with(typed(), "fn f; use f;");

    assert_no_diagnostics(&result);
    assert!(identifier(&result, "f").types.is_empty());
}

#[test]
fn test_kind_mismatch_keeps_first_kind() {
    let result = parse_with(typed(), "int a; call a;");

    assert_codes(&result, &[ErrorCode::E0301]);
    assert_eq!(
        diagnostic_with_code(&result, ErrorCode::E0301).message,
        "Expected Function, but found Variable"
    );
    assert_eq!(identifier(&result, "a").kind, Some(CompletionKind::Variable));
}

#[test]
fn test_matching_kind_is_accepted() {
    let result = parse_with(typed(), "fn f; call f;");

    assert_no_diagnostics(&result);
    assert_eq!(identifier(&result, "f").kind, Some(CompletionKind::Function));
}

#[test]
fn test_later_declaration_completes_identifier() {
    let result = parse_with(typed(), "use u; int u;");

    assert_no_diagnostics(&result);
    let u = identifier(&result, "u");
    assert_eq!(u.kind, Some(CompletionKind::Variable));
    assert!(u.types.contains("int"));
    assert_eq!(u.declaration.as_ref().unwrap().span(), Span::from_coords(0, 11, 0, 12));
}

#[test]
fn test_redeclaration_with_same_kind() {
    let result = parse_with(typed(), "int a; int a;");

    assert_codes(&result, &[ErrorCode::E0201]);
}
