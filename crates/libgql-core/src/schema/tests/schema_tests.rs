use crate::loc::SourceLocation;
use crate::metadata::MetadataKey;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaDefinitions;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeRef;

static OWNER: MetadataKey<String> = MetadataKey::new("owner");

const SDL: &str = "
type Query { node(id: ID!): Node search: [SearchResult!]! }
interface Node { id: ID! }
type User implements Node { id: ID! name: String }
type Post implements Node { id: ID! }
type Tag { label: String }
union SearchResult = User | Post | Tag
enum Role { ADMIN GUEST }
input Filter { role: Role }
";

fn setup_schema() -> Schema {
    Schema::parse(SDL).expect("test schema builds")
}

mod root_types {
    use super::*;

    #[test]
    fn default_root_type_names() {
        let schema = Schema::parse("type Query { a: Int }\ntype Mutation { b: Int }").unwrap();
        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), None);
        assert!(schema.root_type(OperationKind::Subscription).is_none());
    }

    #[test]
    fn explicit_schema_definition() {
        let schema = Schema::parse(
            "\"The API.\"\nschema { query: Root mutation: Change }\n\
             type Root { a: Int }\ntype Change { b: Int }\ntype Query { c: Int }",
        ).unwrap();
        assert_eq!(schema.description(), Some("The API."));
        assert_eq!(schema.query_type_name(), "Root");
        assert_eq!(
            schema.root_type(OperationKind::Mutation).map(|obj_type| obj_type.name()),
            Some("Change"),
        );
        // `Query` is an ordinary type once a schema definition names the roots.
        assert!(schema.field_definition("Query", "__schema").is_none());
        assert!(schema.field_definition("Root", "__schema").is_some());
    }

    #[test]
    fn schema_extension_adds_root_types() {
        let schema = Schema::parse(
            "schema { query: Query }\ntype Query { a: Int }\ntype Sub { s: Int }\n\
             extend schema { subscription: Sub }",
        ).unwrap();
        assert_eq!(schema.subscription_type_name(), Some("Sub"));
    }
}

// =========================================================

mod lookups {
    use super::*;

    #[test]
    fn types_in_definition_order_after_builtins() {
        let schema = setup_schema();
        let names: Vec<&str> = schema.types().keys().map(String::as_str).collect();
        assert_eq!(&names[..5], &["Boolean", "Float", "ID", "Int", "String"]);
        let user_types: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| !name.starts_with("__"))
            .skip(5)
            .collect();
        assert_eq!(user_types, vec![
            "Query", "Node", "User", "Post", "Tag", "SearchResult", "Role", "Filter",
        ]);
    }

    #[test]
    fn builtin_types_and_directives() {
        let schema = setup_schema();
        assert!(schema.type_named("String").is_some_and(GraphQLType::is_builtin));
        assert!(schema.type_named("__Schema").is_some_and(GraphQLType::is_builtin));
        assert!(!schema.type_named("User").is_some_and(GraphQLType::is_builtin));
        for name in ["skip", "include", "deprecated", "specifiedBy"] {
            assert!(schema.directive(name).is_some(), "missing @{name}");
        }
    }

    #[test]
    fn meta_fields() {
        let schema = setup_schema();
        assert!(schema.field_definition("User", "__typename").is_some());
        assert!(schema.field_definition("SearchResult", "__typename").is_some());
        assert!(schema.field_definition("Query", "__type").is_some());
        assert!(schema.field_definition("User", "__schema").is_none());
        assert!(schema.field_definition("Role", "__typename").is_none());
        assert!(schema.type_named("Query").and_then(GraphQLType::fields).is_some_and(|fields| {
            !fields.contains_key("__typename")
        }));
    }

    #[test]
    fn possible_types() {
        let schema = setup_schema();
        let names = |type_name: &str| -> Vec<String> {
            schema
                .possible_types(type_name)
                .iter()
                .map(|obj_type| obj_type.name().to_string())
                .collect()
        };
        assert_eq!(names("Node"), vec!["User", "Post"]);
        assert_eq!(names("SearchResult"), vec!["User", "Post", "Tag"]);
        assert_eq!(names("Tag"), vec!["Tag"]);
        assert!(names("Role").is_empty());

        assert!(schema.is_possible_type("Node", "Post"));
        assert!(!schema.is_possible_type("Node", "Tag"));
        assert!(schema.is_possible_type("User", "User"));
    }

    #[test]
    fn resolving_document_type_refs() {
        let schema = setup_schema();
        let type_ref = TypeRef::list(
            TypeRef::non_null(TypeRef::named("Role", SourceLocation::BuiltIn)).unwrap(),
        );
        let resolved = schema.resolve_type_ref(&type_ref).unwrap();
        assert_eq!(resolved.to_string(), "[Role!]");
        assert_eq!(resolved.kind(), GraphQLTypeKind::Enum);
        assert!(resolved.is_input_type());

        let unknown = TypeRef::named("Widget", SourceLocation::BuiltIn);
        assert!(schema.resolve_type_ref(&unknown).is_none());
    }
}

// =========================================================

mod extensions {
    use super::*;

    #[test]
    fn extensions_append_to_definitions() {
        let schema = Schema::parse(
            "type Query { a: Int }\nextend type Query { b: String }\n\
             enum Role { ADMIN }\nextend enum Role { GUEST }\n\
             union U = Query\ntype Other { c: Int }\nextend union U = Other",
        ).unwrap();
        let query_fields: Vec<&str> = schema
            .type_named("Query")
            .and_then(GraphQLType::fields)
            .map(|fields| fields.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(query_fields, vec!["a", "b"]);

        let role_values: Vec<&str> = schema
            .type_named("Role")
            .and_then(GraphQLType::as_enum)
            .map(|enum_type| enum_type.values().keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(role_values, vec!["ADMIN", "GUEST"]);
        assert!(schema.is_possible_type("U", "Other"));
    }

    #[test]
    fn extension_before_definition() {
        let schema = Schema::parse("extend type Query { b: Int }\ntype Query { a: Int }").unwrap();
        let query = schema.root_type(OperationKind::Query).unwrap();
        assert_eq!(query.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn definitions_loaded_from_several_sources() {
        let mut defs = SchemaDefinitions::new().unwrap();
        defs.load_str(None, "type Query { user: User }").unwrap();
        defs.load_str(None, "type User { id: ID! }\nextend type Query { me: User }").unwrap();
        let schema = defs.build().unwrap();
        assert!(schema.field_definition("Query", "me").is_some());
        assert!(schema.field_definition("User", "id").is_some());
    }
}

// =========================================================

mod metadata {
    use super::*;

    #[test]
    fn metadata_survives_the_build() {
        let mut defs = SchemaDefinitions::parse(SDL).unwrap();
        defs.set_type_metadata("User", &OWNER, "accounts".to_string()).unwrap();
        defs.set_field_metadata("User", "name", &OWNER, "profiles".to_string()).unwrap();
        defs.set_argument_metadata("Query", Some("node"), "id", &OWNER, "ids".to_string())
            .unwrap();
        defs.set_argument_metadata("Filter", None, "role", &OWNER, "auth".to_string()).unwrap();
        defs.set_enum_value_metadata("Role", "ADMIN", &OWNER, "auth".to_string()).unwrap();
        let schema = defs.build().unwrap();

        let owner = |metadata: &crate::metadata::Metadata| metadata.get(&OWNER).cloned();
        assert_eq!(
            schema.type_named("User").and_then(|type_| owner(type_.metadata())),
            Some("accounts".to_string()),
        );
        assert_eq!(
            schema.field_definition("User", "name").and_then(|field| owner(field.metadata())),
            Some("profiles".to_string()),
        );
        assert_eq!(
            schema
                .field_definition("Query", "node")
                .and_then(|field| field.argument("id"))
                .and_then(|arg| owner(arg.metadata())),
            Some("ids".to_string()),
        );
        assert_eq!(
            schema
                .type_named("Filter")
                .and_then(GraphQLType::as_input_object)
                .and_then(|input_type| input_type.field("role"))
                .and_then(|field| owner(field.metadata())),
            Some("auth".to_string()),
        );
        assert_eq!(
            schema
                .type_named("Role")
                .and_then(GraphQLType::as_enum)
                .and_then(|enum_type| enum_type.value("ADMIN"))
                .and_then(|value| owner(value.metadata())),
            Some("auth".to_string()),
        );
        assert!(schema.type_named("Post").is_some_and(|type_| !type_.metadata().contains(&OWNER)));
    }

    #[test]
    fn unknown_metadata_targets() {
        let mut defs = SchemaDefinitions::parse(SDL).unwrap();
        assert!(defs.set_type_metadata("Nope", &OWNER, String::new()).is_err());
        assert!(defs.set_field_metadata("Role", "ADMIN", &OWNER, String::new()).is_err());
        assert!(defs.set_argument_metadata("Query", Some("node"), "x", &OWNER, String::new()).is_err());
        assert!(defs.set_argument_metadata("User", None, "id", &OWNER, String::new()).is_err());
        assert!(defs.set_enum_value_metadata("Role", "OWNER", &OWNER, String::new()).is_err());
    }
}
