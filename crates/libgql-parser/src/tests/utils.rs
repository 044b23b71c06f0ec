//! Shared helpers for parser tests.

use crate::ast;
use crate::GraphQLParseError;
use crate::GraphQLParser;

/// Parses `source`, panicking with the rendered diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::Document<'_> {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => doc,
        Err(err) => panic!(
            "expected `{source}` to parse:\n{}",
            err.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> GraphQLParseError {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => panic!("expected `{source}` to fail, got {doc:#?}"),
        Err(err) => err,
    }
}

/// Returns the only operation of a single-definition document.
pub fn single_operation<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::OperationDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        ast::Definition::Operation(op) => op,
        other => panic!("expected an operation, got {other:#?}"),
    }
}

/// Returns the only type definition of a single-definition document.
pub fn single_type_definition<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::TypeDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        ast::Definition::TypeDefinition(def) => def,
        other => panic!("expected a type definition, got {other:#?}"),
    }
}

/// Returns the fields of a selection set, panicking on any fragment.
pub fn fields<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
) -> Vec<&'a ast::Field<'src>> {
    selection_set
        .selections
        .iter()
        .map(|selection| match selection {
            ast::Selection::Field(field) => field,
            other => panic!("expected a field, got {other:#?}"),
        })
        .collect()
}
