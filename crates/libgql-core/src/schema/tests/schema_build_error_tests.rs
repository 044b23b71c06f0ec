//! Schemas that must fail to build, one per kind of mistake.

use crate::loc::FilePosition;
use crate::loc::SourceLocation;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinitions;
use crate::types::TypeRef;
use std::path::Path;
use std::path::PathBuf;

fn build_err(sdl: &str) -> SchemaBuildError {
    match Schema::parse(sdl) {
        Ok(_) => panic!("expected schema to fail to build:\n{sdl}"),
        Err(err) => err,
    }
}

mod definitions {
    use super::*;

    #[test]
    fn missing_query_type() {
        assert_eq!(build_err("type Foo { a: Int }"), SchemaBuildError::NoQueryType);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(build_err("type Query {"), SchemaBuildError::Parse(_)));
    }

    #[test]
    fn duplicate_type() {
        let err = build_err("type Query { a: Int }\ntype Query { b: Int }");
        assert!(matches!(
            err,
            SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. } if type_name == "Query"
        ));
    }

    #[test]
    fn redefined_builtin_type() {
        let err = build_err("type Query { a: Int }\nscalar String");
        assert!(matches!(
            err,
            SchemaBuildError::RedefinedBuiltinType { ref type_name, .. } if type_name == "String"
        ));
    }

    #[test]
    fn reserved_type_and_field_names() {
        let err = build_err("type Query { a: Int }\ntype __Secret { a: Int }");
        assert!(matches!(err, SchemaBuildError::ReservedName { ref name, .. } if name == "__Secret"));

        let err = build_err("type Query { __a: Int }");
        assert!(matches!(err, SchemaBuildError::ReservedName { ref name, .. } if name == "__a"));
    }

    #[test]
    fn unknown_type_reports_its_location() {
        let mut defs = SchemaDefinitions::new().unwrap();
        defs.load_str(Some(Path::new("schema.graphql")), "type Query {\n  a: Widget\n}").unwrap();
        assert_eq!(defs.build().unwrap_err(), SchemaBuildError::UnknownType {
            type_name: "Widget".to_string(),
            location: SourceLocation::Source(FilePosition {
                file_path: Some(PathBuf::from("schema.graphql")),
                line: 2,
                column: 6,
            }),
        });
    }

    #[test]
    fn duplicate_fields_arguments_and_values() {
        assert!(matches!(
            build_err("type Query { a: Int a: String }"),
            SchemaBuildError::DuplicateFieldDefinition { ref field_name, .. } if field_name == "a"
        ));
        assert!(matches!(
            build_err("type Query { a(x: Int, x: Int): Int }"),
            SchemaBuildError::DuplicateArgumentDefinition { ref argument_name, .. }
                if argument_name == "x"
        ));
        assert!(matches!(
            build_err("type Query { a: E }\nenum E { A A }"),
            SchemaBuildError::DuplicateEnumValue { ref value_name, .. } if value_name == "A"
        ));
    }

    #[test]
    fn union_members() {
        assert!(matches!(
            build_err("type Query { a: U }\ntype B { b: Int }\nunion U = B | B"),
            SchemaBuildError::DuplicateUnionMember { ref member_name, .. } if member_name == "B"
        ));
        assert!(matches!(
            build_err("type Query { a: U }\nunion U = Int"),
            SchemaBuildError::NonObjectUnionMember { ref member_name, .. } if member_name == "Int"
        ));
    }

    #[test]
    fn input_and_output_positions() {
        assert!(matches!(
            build_err("type Query { a: In }\ninput In { x: Int }"),
            SchemaBuildError::NonOutputFieldType { ref field_type, .. } if field_type == "In"
        ));
        assert!(matches!(
            build_err("type Query { a(x: Query): Int }"),
            SchemaBuildError::NonInputArgumentType { ref arg_type, .. } if arg_type == "Query"
        ));
    }

    #[test]
    fn double_non_null() {
        let int = TypeRef::non_null(TypeRef::named("Int", SourceLocation::BuiltIn)).unwrap();
        assert!(matches!(
            TypeRef::non_null(int),
            Err(SchemaBuildError::DoubleNonNull { ref type_ref, .. }) if type_ref == "Int!"
        ));
    }
}

// =========================================================

mod interfaces {
    use super::*;

    #[test]
    fn implementing_a_non_interface() {
        assert!(matches!(
            build_err("type Query implements Foo { a: Int }\ntype Foo { a: Int }"),
            SchemaBuildError::NonInterfaceImplemented { ref implemented_name, .. }
                if implemented_name == "Foo"
        ));
    }

    #[test]
    fn implementing_itself() {
        assert!(matches!(
            build_err("type Query { a: I }\ninterface I implements I { a: Int }"),
            SchemaBuildError::ImplementsSelf { ref type_name, .. } if type_name == "I"
        ));
    }

    #[test]
    fn missing_interface_field() {
        assert!(matches!(
            build_err("type Query implements Node { a: Int }\ninterface Node { id: ID! }"),
            SchemaBuildError::InterfaceFieldNotImplemented { ref field_name, .. }
                if field_name == "id"
        ));
    }

    #[test]
    fn field_type_must_be_a_subtype() {
        assert!(matches!(
            build_err("type Query implements Node { id: String }\ninterface Node { id: ID! }"),
            SchemaBuildError::InterfaceFieldTypeMismatch { ref actual_type, ref expected_type, .. }
                if actual_type == "String" && expected_type == "ID!"
        ));
    }

    #[test]
    fn covariant_field_types_are_allowed() {
        let schema = Schema::parse(
            "type Query { node: Node }\n\
             interface Node { friend: Node ids: [ID] }\n\
             type User implements Node { friend: User ids: [ID!]! }",
        );
        assert!(schema.is_ok());
    }

    #[test]
    fn interface_arguments() {
        assert!(matches!(
            build_err("interface I { f(x: Int): Int }\ntype Query implements I { f: Int }"),
            SchemaBuildError::InterfaceArgumentMissing { ref argument_name, .. }
                if argument_name == "x"
        ));
        assert!(matches!(
            build_err("interface I { f(x: Int): Int }\ntype Query implements I { f(x: String): Int }"),
            SchemaBuildError::InterfaceArgumentTypeMismatch { ref actual_type, .. }
                if actual_type == "String"
        ));
        assert!(matches!(
            build_err("interface I { f: Int }\ntype Query implements I { f(y: Int!): Int }"),
            SchemaBuildError::RequiredExtraArgument { ref argument_name, .. }
                if argument_name == "y"
        ));
    }

    #[test]
    fn optional_extra_arguments_are_allowed() {
        let schema = Schema::parse(
            "interface I { f: Int }\ntype Query implements I { f(y: Int, z: Int! = 1): Int }",
        );
        assert!(schema.is_ok());
    }

    #[test]
    fn transitive_interfaces_must_be_declared() {
        assert!(matches!(
            build_err(
                "interface A { a: Int }\ninterface B implements A { a: Int }\n\
                 type Query implements B { a: Int }",
            ),
            SchemaBuildError::MissingTransitiveInterface { ref missing_interface_name, .. }
                if missing_interface_name == "A"
        ));
    }
}

// =========================================================

mod schema_definitions_and_extensions {
    use super::*;

    #[test]
    fn root_type_must_be_an_object() {
        assert!(matches!(
            build_err("schema { query: Q }\ninterface Q { a: Int }"),
            SchemaBuildError::NonObjectRootType { operation_kind: OperationKind::Query, .. }
        ));
    }

    #[test]
    fn duplicate_schema_definitions() {
        assert!(matches!(
            build_err("schema { query: Query }\nschema { query: Query }\ntype Query { a: Int }"),
            SchemaBuildError::DuplicateSchemaDefinition { .. }
        ));
        assert!(matches!(
            build_err("schema { query: Query query: Query }\ntype Query { a: Int }"),
            SchemaBuildError::DuplicateRootOperationType { operation_kind: OperationKind::Query, .. }
        ));
    }

    #[test]
    fn extension_of_undefined_type() {
        assert!(matches!(
            build_err("type Query { a: Int }\nextend type Foo { b: Int }"),
            SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. } if type_name == "Foo"
        ));
    }

    #[test]
    fn extension_of_different_kind() {
        assert!(matches!(
            build_err("type Query { a: Int }\nextend input Query { b: Int }"),
            SchemaBuildError::ExtensionKindMismatch { ref type_name, .. } if type_name == "Query"
        ));
    }

    #[test]
    fn extension_redefining_a_field() {
        assert!(matches!(
            build_err("type Query { a: Int }\nextend type Query { a: Int }"),
            SchemaBuildError::DuplicateFieldDefinition { ref field_name, .. } if field_name == "a"
        ));
    }

    #[test]
    fn directive_definitions() {
        assert!(matches!(
            build_err("directive @skip on FIELD\ntype Query { a: Int }"),
            SchemaBuildError::RedefinedBuiltinDirective { ref directive_name, .. }
                if directive_name == "skip"
        ));
        assert!(matches!(
            build_err("directive @a on FIELD\ndirective @a on FIELD\ntype Query { a: Int }"),
            SchemaBuildError::DuplicateDirectiveDefinition { ref directive_name, .. }
                if directive_name == "a"
        ));
    }
}
