//! Find references tests for the IDE layer.

use rstest::rstest;

use crate::helpers::grammars::*;
use uld::ide::{AnalysisHost, find_references};
use uld::{Position, Span};

const SOURCE: &str = "Program p\nvar variable = 0;\nvariable print;\nvariable print;";

// =============================================================================
// FIND REFERENCES - SINGLE DOCUMENT
// =============================================================================

#[rstest]
#[case::usage(Position::new(2, 0))]
#[case::inside_usage(Position::new(3, 4))]
#[case::declaration(Position::new(1, 4))]
#[case::end_of_declaration(Position::new(1, 12))]
fn test_find_references_from_any_occurrence(#[case] position: Position) {
    let result = parse(SOURCE);

    let spans: Vec<Span> = find_references(&result, position)
        .into_iter()
        .map(|location| location.span)
        .collect();
    assert_eq!(
        spans,
        vec![
            Span::from_coords(1, 4, 1, 12),
            Span::from_coords(2, 0, 2, 8),
            Span::from_coords(3, 0, 3, 8),
        ]
    );
}

#[rstest]
#[case::keyword(Position::new(1, 1))]
#[case::program_name(Position::new(0, 8))]
#[case::past_end(Position::new(9, 0))]
fn test_find_references_off_identifier(#[case] position: Position) {
    let result = parse(SOURCE);

    assert!(find_references(&result, position).is_empty());
}

#[test]
fn test_references_carry_document_uri() {
    let result = parse(SOURCE);

    let locations = find_references(&result, Position::new(2, 0));
    assert!(locations.iter().all(|location| location.uri == URI));
}

// =============================================================================
// FIND REFERENCES - ACROSS DOCUMENTS
// =============================================================================

#[test]
fn test_find_references_across_documents() {
    let mut host = AnalysisHost::new(var_and_print());
    host.set_document("file:///prog1.txt", "Program prog1\nvariable print;");
    host.set_document("file:///prog2.txt", "Program prog2\nvar variable = 0;");
    let analysis = host.analysis();

    let locations = analysis.references_at("file:///prog1.txt", Position::new(1, 0));

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].uri, "file:///prog1.txt");
    assert_eq!(locations[0].span, Span::from_coords(1, 0, 1, 8));
    assert_eq!(locations[1].uri, "file:///prog2.txt");
    assert_eq!(locations[1].span, Span::from_coords(1, 4, 1, 12));
}

#[test]
fn test_references_match_exact_name_only() {
    let mut host = AnalysisHost::new(var_and_print());
    host.set_document("file:///a.txt", "Program a\nvar item = 0;");
    host.set_document("file:///b.txt", "Program b\nitems print;\nItem print;");
    let analysis = host.analysis();

    let locations = analysis.references_at("file:///a.txt", Position::new(1, 4));
    assert_eq!(locations.len(), 1);
}
