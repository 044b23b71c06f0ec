//! Tests for `SourcePosition` and `GraphQLSourceSpan`.

use crate::GraphQLSourceSpan;
use crate::SourcePosition;

#[test]
fn display_positions_are_one_based() {
    let pos = SourcePosition::new(2, 4, Some(4), 20, 20);
    assert_eq!(pos.display_line(), 3);
    assert_eq!(pos.display_column(), 5);
    assert_eq!(pos.to_string(), "3:5");
}

#[test]
fn start_of_document_is_zero() {
    let pos = SourcePosition::start_of_document();
    assert_eq!(pos.line(), 0);
    assert_eq!(pos.col_utf8(), 0);
    assert_eq!(pos.byte_offset(), 0);
    assert_eq!(pos.char_offset(), 0);
}

#[test]
fn span_source_slice() {
    let source = "type Query";
    let span = GraphQLSourceSpan::new(
        SourcePosition::new(0, 5, Some(5), 5, 5),
        SourcePosition::new(0, 10, Some(10), 10, 10),
    );
    assert_eq!(span.source_slice(source), Some("Query"));
    assert!(!span.is_empty());
}

#[test]
fn span_source_slice_out_of_range() {
    let span = GraphQLSourceSpan::new(
        SourcePosition::new(0, 5, Some(5), 5, 5),
        SourcePosition::new(0, 50, Some(50), 50, 50),
    );
    assert_eq!(span.source_slice("short"), None);
}
