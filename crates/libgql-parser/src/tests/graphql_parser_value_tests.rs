//! Tests for value literals in argument and default-value positions.

use crate::ast;
use crate::tests::utils::fields;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::tests::utils::single_operation;
use crate::GraphQLParseErrorKind;

/// Parses `{ f(arg: <value>) }` and hands the argument's value to `check`.
fn with_argument_value(value_source: &str, check: impl FnOnce(&ast::Value<'_>)) {
    let source = format!("{{ f(arg: {value_source}) }}");
    let doc = parse_ok(&source);
    let op = single_operation(&doc);
    check(&fields(&op.selection_set)[0].arguments[0].value);
}

#[test]
fn scalars() {
    with_argument_value("-42", |value| {
        assert!(matches!(value, ast::Value::Int(int) if int.raw == "-42"));
    });
    with_argument_value("1.5e3", |value| {
        assert!(matches!(value, ast::Value::Float(float) if float.raw == "1.5e3"));
    });
    with_argument_value("false", |value| {
        assert!(matches!(
            value,
            ast::Value::Boolean(ast::BooleanValue { value: false, .. }),
        ));
    });
    with_argument_value("null", |value| {
        assert!(matches!(value, ast::Value::Null(_)));
    });
    with_argument_value("RED", |value| {
        assert!(matches!(value, ast::Value::Enum(e) if e.value == "RED"));
    });
    with_argument_value("$var", |value| {
        assert!(matches!(value, ast::Value::Variable(v) if v.name.as_str() == "var"));
    });
}

#[test]
fn strings_are_cooked() {
    with_argument_value(r#""a\nb A""#, |value| {
        let ast::Value::String(string) = value else {
            panic!("expected a string, got {value:#?}");
        };
        assert_eq!(string.value, "a\nb A");
        assert!(!string.is_block);
        assert_eq!(string.raw, r#""a\nb A""#);
    });
}

#[test]
fn block_strings_strip_indentation() {
    with_argument_value("\"\"\"\n    hello\n      world\n  \"\"\"", |value| {
        let ast::Value::String(string) = value else {
            panic!("expected a string, got {value:#?}");
        };
        assert!(string.is_block);
        assert_eq!(string.value, "hello\n  world");
    });
}

#[test]
fn lists_and_objects_nest() {
    with_argument_value("[1, {a: [true], b: {c: null}}]", |value| {
        let ast::Value::List(list) = value else {
            panic!("expected a list, got {value:#?}");
        };
        assert_eq!(list.values.len(), 2);
        let ast::Value::Object(object) = &list.values[1] else {
            panic!("expected an object");
        };
        let names: Vec<_> = object.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    });
}

#[test]
fn empty_list_and_object_are_values() {
    with_argument_value("[]", |value| {
        assert!(matches!(value, ast::Value::List(list) if list.values.is_empty()));
    });
    with_argument_value("{}", |value| {
        assert!(matches!(value, ast::Value::Object(obj) if obj.fields.is_empty()));
    });
}

#[test]
fn integer_text_is_preserved_beyond_32_bits() {
    with_argument_value("99999999999", |value| {
        assert!(matches!(value, ast::Value::Int(int) if int.raw == "99999999999"));
    });
}

mod const_contexts {
    use super::*;

    #[test]
    fn variable_in_variable_default_value() {
        let err = parse_err("query Q($a: Int = $b) { f }");
        assert_eq!(err.kind(), &GraphQLParseErrorKind::InvalidSyntax);
        assert_eq!(err.message(), "variables are not allowed in variable default values");
    }

    #[test]
    fn variable_in_input_default_value() {
        let err = parse_err("type Query { f(a: Int = $b): Int }");
        assert_eq!(
            err.message(),
            "variables are not allowed in input field default values",
        );
    }

    #[test]
    fn variable_in_type_system_directive_argument() {
        let err = parse_err("type Query @key(fields: $f) { a: Int }");
        assert_eq!(
            err.message(),
            "variables are not allowed in type system directive arguments",
        );
        assert_eq!(err.column(), 25);
    }

    #[test]
    fn variable_nested_in_const_list() {
        let err = parse_err("query Q($a: [Int] = [1, $b]) { f }");
        assert_eq!(err.kind(), &GraphQLParseErrorKind::InvalidSyntax);
    }
}
