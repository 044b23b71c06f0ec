//! Tests for `GraphQLTokenStream` lookahead.

use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLTokenStream;

#[test]
fn peek_does_not_consume() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("a b"));
    assert_eq!(stream.peek().map(|t| t.kind.clone()), Some(GraphQLTokenKind::name_borrowed("a")));
    assert_eq!(stream.peek().map(|t| t.kind.clone()), Some(GraphQLTokenKind::name_borrowed("a")));
    assert_eq!(
        stream.consume().map(|t| t.kind),
        Some(GraphQLTokenKind::name_borrowed("a")),
    );
    assert_eq!(
        stream.consume().map(|t| t.kind),
        Some(GraphQLTokenKind::name_borrowed("b")),
    );
}

#[test]
fn peek_nth_looks_past_the_buffer() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("a : b"));
    assert_eq!(
        stream.peek_nth(2).map(|t| t.kind.clone()),
        Some(GraphQLTokenKind::name_borrowed("b")),
    );
    assert_eq!(
        stream.peek_nth(0).map(|t| t.kind.clone()),
        Some(GraphQLTokenKind::name_borrowed("a")),
    );
    assert_eq!(stream.peek_nth(3).map(|t| t.kind.clone()), Some(GraphQLTokenKind::Eof));
    assert!(stream.peek_nth(4).is_none());
}

#[test]
fn is_at_end_on_eof() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("x"));
    assert!(!stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    assert!(stream.consume().is_none());
}
