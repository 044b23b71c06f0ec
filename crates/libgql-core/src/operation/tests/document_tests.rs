use crate::ErrorLocation;
use crate::loc::SourceLocation;
use crate::operation::Document;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

fn parse(source: &str) -> Document {
    match Document::parse(source, None) {
        Ok(document) => document,
        Err(err) => panic!("failed to parse test document: {err}"),
    }
}

fn line_col(location: &SourceLocation) -> Option<(usize, usize)> {
    location
        .error_location()
        .map(|ErrorLocation { line, column }| (line, column))
}

mod operations {
    use super::*;

    #[test]
    fn operations_in_definition_order() {
        let doc = parse("query A { a }\nmutation B { b }\nsubscription { c }");
        let summary: Vec<_> = doc
            .operations()
            .iter()
            .map(|op| (op.name(), op.operation_kind()))
            .collect();
        assert_eq!(summary, vec![
            (Some("A"), OperationKind::Query),
            (Some("B"), OperationKind::Mutation),
            (None, OperationKind::Subscription),
        ]);
        assert_eq!(line_col(doc.operations()[1].location()), Some((2, 1)));
    }

    #[test]
    fn operation_lookup() {
        let single = parse("{ a }");
        assert!(single.operation(None).is_some());

        let several = parse("query A { a } query B { b }");
        assert!(several.operation(None).is_none());
        assert_eq!(several.operation(Some("B")).and_then(|op| op.name()), Some("B"));
        assert!(several.operation(Some("C")).is_none());
    }

    #[test]
    fn variable_definitions() {
        let doc = parse("query Q($ids: [ID!]!, $first: Int = 3) { a }");
        let op = &doc.operations()[0];
        let ids = op.variable_definition("ids").unwrap();
        assert_eq!(ids.var_type().to_string(), "[ID!]!");
        assert_eq!(ids.default_value(), None);
        assert_eq!(line_col(ids.location()), Some((1, 9)));

        let first = op.variable_definition("first").unwrap();
        assert_eq!(first.default_value(), Some(&Value::Int(3)));
        assert!(op.variable_definition("missing").is_none());
    }

    #[test]
    fn source_path_is_kept_in_locations() {
        let doc = Document::parse("{ a }", Some(Path::new("queries/a.graphql"))).unwrap();
        assert_eq!(
            doc.operations()[0].location().file_path(),
            Some(Path::new("queries/a.graphql")),
        );
    }
}

// =========================================================

mod selections {
    use super::*;

    #[test]
    fn fields_with_aliases_arguments_and_directives() {
        let doc = parse(
            "query Q($id: ID) { friend: user(id: $id, limit: 10, where: {name: \"a\"}) @skip(if: false) { id } }",
        );
        let field = doc.operations()[0].selection_set().fields().next().unwrap();
        assert_eq!(field.name(), "user");
        assert_eq!(field.alias(), Some("friend"));
        assert_eq!(field.response_key(), "friend");
        assert_eq!(line_col(field.location()), Some((1, 20)));

        assert_eq!(field.argument("id").map(|arg| arg.value()), Some(&Value::Variable("id".to_string())));
        assert_eq!(field.argument("limit").map(|arg| arg.value()), Some(&Value::Int(10)));
        let mut expected_where = IndexMap::new();
        expected_where.insert("name".to_string(), Value::String("a".to_string()));
        assert_eq!(
            field.argument("where").map(|arg| arg.value()),
            Some(&Value::Object(expected_where)),
        );

        let directive = &field.directives()[0];
        assert_eq!(directive.name(), "skip");
        assert_eq!(directive.argument("if"), Some(&Value::Boolean(false)));
        assert_eq!(field.selection_set().map(|set| set.selections().len()), Some(1));
    }

    #[test]
    fn fragment_spreads_and_inline_fragments() {
        let doc = parse(
            "{ node { ...NodeFields ... on User { name } ... @include(if: true) { id } } }\n\
             fragment NodeFields on Node { id }",
        );
        let node = doc.operations()[0].selection_set().fields().next().unwrap();
        let selections = node.selection_set().unwrap().selections();
        assert_eq!(selections.len(), 3);

        let Selection::FragmentSpread(spread) = &selections[0] else {
            panic!("expected a fragment spread, got {:?}", selections[0]);
        };
        assert_eq!(spread.fragment_name(), "NodeFields");

        let Selection::InlineFragment(typed) = &selections[1] else {
            panic!("expected an inline fragment, got {:?}", selections[1]);
        };
        assert_eq!(typed.type_condition().map(|cond| cond.name()), Some("User"));

        let Selection::InlineFragment(untyped) = &selections[2] else {
            panic!("expected an inline fragment, got {:?}", selections[2]);
        };
        assert!(untyped.type_condition().is_none());
        assert_eq!(untyped.directives()[0].name(), "include");
    }

    #[test]
    fn fragment_definitions() {
        let doc = parse("{ a }\nfragment B on Query { b }\nfragment A on Query { a }");
        let names: Vec<&str> = doc.fragments().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["B", "A"]);

        let fragment = doc.fragment("A").unwrap();
        assert_eq!(fragment.type_condition().name(), "Query");
        assert_eq!(line_col(fragment.type_condition().ref_location()), Some((3, 15)));
        assert_eq!(fragment.selection_set().fields().count(), 1);
    }

    #[test]
    fn literals() {
        let doc = parse(
            "{ a(list: [1, 2.5, \"s\", true, null, RED, [ ]]) }",
        );
        let field = doc.operations()[0].selection_set().fields().next().unwrap();
        assert_eq!(field.argument("list").map(|arg| arg.value()), Some(&Value::List(vec![
            Value::Int(1),
            Value::Float(2.5),
            Value::String("s".to_string()),
            Value::Boolean(true),
            Value::Null,
            Value::Enum("RED".to_string()),
            Value::List(vec![]),
        ])));
        assert_eq!(
            field.argument("list").map(|arg| arg.value().to_string()),
            Some("[1, 2.5, \"s\", true, null, RED, []]".to_string()),
        );
    }
}
