//! Tests for parsing operations, fragments and selection sets.

use crate::ast;
use crate::tests::utils::fields;
use crate::tests::utils::parse_ok;
use crate::tests::utils::single_operation;

mod operations {
    use super::*;

    #[test]
    fn shorthand_query() {
        let source = "{ hello }";
        let doc = parse_ok(source);
        let op = single_operation(&doc);
        assert!(op.shorthand);
        assert_eq!(op.operation_kind, ast::OperationKind::Query);
        assert!(op.name.is_none());
        assert_eq!(op.to_source(source), "{ hello }");
    }

    #[test]
    fn named_operations_of_every_kind() {
        let doc = parse_ok(
            "query Q { a } mutation M { b } subscription S { c }",
        );
        let kinds: Vec<_> = doc
            .definitions
            .iter()
            .map(|def| match def {
                ast::Definition::Operation(op) => (
                    op.operation_kind,
                    op.name.as_ref().map(|n| n.as_str().to_string()),
                ),
                other => panic!("unexpected definition {other:#?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (ast::OperationKind::Query, Some("Q".to_string())),
                (ast::OperationKind::Mutation, Some("M".to_string())),
                (ast::OperationKind::Subscription, Some("S".to_string())),
            ],
        );
    }

    #[test]
    fn anonymous_keyword_query() {
        let doc = parse_ok("query { a }");
        let op = single_operation(&doc);
        assert!(!op.shorthand);
        assert!(op.name.is_none());
    }

    #[test]
    fn variable_definitions_with_defaults_and_directives() {
        let doc = parse_ok(
            "query Q($id: ID!, $first: Int = 10, $tags: [String!] @deprecated) { a }",
        );
        let op = single_operation(&doc);
        assert_eq!(op.variable_definitions.len(), 3);

        let id = &op.variable_definitions[0];
        assert_eq!(id.variable.as_str(), "id");
        assert!(id.var_type.nullability().is_non_null());
        assert!(id.default_value.is_none());

        let first = &op.variable_definitions[1];
        match &first.default_value {
            Some(ast::Value::Int(int)) => assert_eq!(int.raw, "10"),
            other => panic!("expected an int default, got {other:#?}"),
        }

        let tags = &op.variable_definitions[2];
        assert!(matches!(tags.var_type, ast::TypeAnnotation::List(_)));
        assert_eq!(tags.var_type.innermost_name().as_str(), "String");
        assert_eq!(tags.directives.len(), 1);
        assert_eq!(tags.directives[0].name.as_str(), "deprecated");
    }

    #[test]
    fn operation_directives() {
        let doc = parse_ok("query Q @live(interval: 5) { a }");
        let op = single_operation(&doc);
        assert_eq!(op.directives.len(), 1);
        assert_eq!(op.directives[0].arguments[0].name.as_str(), "interval");
    }

    #[test]
    fn keywords_are_valid_operation_names() {
        let doc = parse_ok("query query { a }");
        let op = single_operation(&doc);
        assert_eq!(op.name.as_ref().map(|n| n.as_str()), Some("query"));
    }
}

mod selections {
    use super::*;

    #[test]
    fn field_alias_and_arguments() {
        let doc = parse_ok("{ smallPic: profilePic(size: 64, crop: true) }");
        let op = single_operation(&doc);
        let field = fields(&op.selection_set)[0];
        assert_eq!(field.alias.as_ref().map(|a| a.as_str()), Some("smallPic"));
        assert_eq!(field.name.as_str(), "profilePic");
        assert_eq!(field.response_key(), "smallPic");
        assert_eq!(field.arguments.len(), 2);
        assert!(matches!(
            field.arguments[1].value,
            ast::Value::Boolean(ast::BooleanValue { value: true, .. }),
        ));
    }

    #[test]
    fn commas_are_optional() {
        let with_commas = parse_ok("{ a, b, c }");
        let without_commas = parse_ok("{ a b c }");
        let names = |doc: &ast::Document<'_>| -> Vec<String> {
            fields(&single_operation(doc).selection_set)
                .iter()
                .map(|f| f.name.as_str().to_string())
                .collect()
        };
        assert_eq!(names(&with_commas), vec!["a", "b", "c"]);
        assert_eq!(names(&with_commas), names(&without_commas));
    }

    #[test]
    fn nested_selection_sets() {
        let doc = parse_ok("{ user { friends { name } } }");
        let op = single_operation(&doc);
        let user = fields(&op.selection_set)[0];
        let friends = fields(user.selection_set.as_ref().unwrap())[0];
        let name = fields(friends.selection_set.as_ref().unwrap())[0];
        assert_eq!(name.name.as_str(), "name");
        assert!(name.selection_set.is_none());
    }

    #[test]
    fn fragment_spread_and_inline_fragments() {
        let doc = parse_ok(
            "{ ...UserFields @include(if: $x) ... on User { id } ... @skip(if: true) { name } }",
        );
        let op = single_operation(&doc);
        let selections = &op.selection_set.selections;
        assert_eq!(selections.len(), 3);

        match &selections[0] {
            ast::Selection::FragmentSpread(spread) => {
                assert_eq!(spread.name.as_str(), "UserFields");
                assert_eq!(spread.directives[0].name.as_str(), "include");
            },
            other => panic!("expected a spread, got {other:#?}"),
        }
        match &selections[1] {
            ast::Selection::InlineFragment(inline) => {
                let condition = inline.type_condition.as_ref().unwrap();
                assert_eq!(condition.named_type.as_str(), "User");
                assert!(inline.directives.is_empty());
            },
            other => panic!("expected an inline fragment, got {other:#?}"),
        }
        match &selections[2] {
            ast::Selection::InlineFragment(inline) => {
                assert!(inline.type_condition.is_none());
                assert_eq!(inline.directives[0].name.as_str(), "skip");
            },
            other => panic!("expected an inline fragment, got {other:#?}"),
        }
    }

    #[test]
    fn field_named_like_keywords() {
        let doc = parse_ok("{ type fragment query on null }");
        let names: Vec<_> = fields(&single_operation(&doc).selection_set)
            .iter()
            .map(|f| f.name.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["type", "fragment", "query", "on", "null"]);
    }
}

mod fragments {
    use super::*;

    #[test]
    fn fragment_definition() {
        let source = "fragment UserFields on User @foo { id name }";
        let doc = parse_ok(source);
        let ast::Definition::Fragment(fragment) = &doc.definitions[0] else {
            panic!("expected a fragment");
        };
        assert_eq!(fragment.name.as_str(), "UserFields");
        assert_eq!(fragment.type_condition.named_type.as_str(), "User");
        assert_eq!(fragment.directives.len(), 1);
        assert_eq!(fragment.selection_set.selections.len(), 2);
        assert_eq!(fragment.to_source(source), source);
    }

    #[test]
    fn mixed_document_keeps_definition_order() {
        let doc = parse_ok(
            "type Query { a: Int } query { a } fragment F on Query { a }",
        );
        assert!(matches!(doc.definitions[0], ast::Definition::TypeDefinition(_)));
        assert!(matches!(doc.definitions[1], ast::Definition::Operation(_)));
        assert!(matches!(doc.definitions[2], ast::Definition::Fragment(_)));
        assert_eq!(doc.executable_definitions().count(), 2);
        assert_eq!(doc.type_system_definitions().count(), 1);
    }
}

mod positions {
    use super::*;

    #[test]
    fn field_span_covers_alias_through_selection_set() {
        let source = "{\n  a: b(x: 1) { c }\n}";
        let doc = parse_ok(source);
        let field = fields(&single_operation(&doc).selection_set)[0];
        assert_eq!(field.to_source(source), "a: b(x: 1) { c }");
        assert_eq!(field.span.start_inclusive.display_line(), 2);
        assert_eq!(field.span.start_inclusive.display_column(), 3);
    }

    #[test]
    fn name_span_points_at_name_token() {
        let source = "query Q { hello }";
        let doc = parse_ok(source);
        let name = single_operation(&doc).name.as_ref().unwrap();
        assert_eq!(name.span.start_inclusive.byte_offset(), 6);
        assert_eq!(name.span.end_exclusive.byte_offset(), 7);
    }
}
