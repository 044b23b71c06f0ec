//! Property tests: the lexer and parser never panic, and numeric token text
//! survives parsing unchanged.

use crate::ast;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParser;
use proptest::prelude::*;

proptest! {
    #[test]
    fn parser_never_panics_on_arbitrary_input(source in "\\PC{0,64}") {
        let _ = GraphQLParser::new(&source).parse_document();
    }

    #[test]
    fn parser_never_panics_on_graphql_like_input(
        source in "[{}()\\[\\]:$@!=|&. a-z\"0-9\n]{0,64}",
    ) {
        let _ = GraphQLParser::new(&source).parse_document();
    }

    #[test]
    fn lexer_always_ends_with_single_eof(source in "\\PC{0,64}") {
        let tokens: Vec<_> = StrGraphQLTokenSource::new(&source).collect();
        let eof_count = tokens
            .iter()
            .filter(|t| matches!(t.kind, GraphQLTokenKind::Eof))
            .count();
        prop_assert_eq!(eof_count, 1);
        prop_assert!(matches!(tokens.last().map(|t| &t.kind), Some(GraphQLTokenKind::Eof)));
    }

    #[test]
    fn int_literal_text_round_trips(n in any::<i64>()) {
        let source = format!("{{ f(a: {n}) }}");
        let doc = GraphQLParser::new(&source).parse_document();
        prop_assert!(doc.is_ok());
        let doc = doc.unwrap();
        let ast::Definition::Operation(op) = &doc.definitions[0] else {
            return Err(TestCaseError::fail("expected an operation"));
        };
        let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
            return Err(TestCaseError::fail("expected a field"));
        };
        let ast::Value::Int(int) = &field.arguments[0].value else {
            return Err(TestCaseError::fail("expected an int"));
        };
        prop_assert_eq!(int.raw.parse::<i64>().ok(), Some(n));
    }

    #[test]
    fn name_spans_slice_back_to_the_name(name in "[_A-Za-z][_0-9A-Za-z]{0,16}") {
        let source = format!("{{ {name} }}");
        let doc = GraphQLParser::new(&source).parse_document();
        prop_assert!(doc.is_ok());
        let doc = doc.unwrap();
        let ast::Definition::Operation(op) = &doc.definitions[0] else {
            return Err(TestCaseError::fail("expected an operation"));
        };
        let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
            return Err(TestCaseError::fail("expected a field"));
        };
        prop_assert_eq!(field.name.to_source(&source), name);
    }
}
