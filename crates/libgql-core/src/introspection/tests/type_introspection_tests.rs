use crate::introspection::tests::utils::introspect;
use serde_json::json;

mod type_lookup {
    use super::*;

    #[tokio::test]
    async fn object_fields_and_wrapped_types() {
        let data = introspect(
            "{ __type(name: \"User\") {
                 kind name description
                 interfaces { name }
                 fields { name type { kind name ofType { kind name ofType { name } } } }
               } }",
        ).await;
        assert_eq!(data, json!({
            "__type": {
                "kind": "OBJECT",
                "name": "User",
                "description": "Someone with an account.",
                "interfaces": [{"name": "Node"}],
                "fields": [
                    {
                        "name": "id",
                        "type": {
                            "kind": "NON_NULL",
                            "name": null,
                            "ofType": {"kind": "SCALAR", "name": "ID", "ofType": null},
                        },
                    },
                    {
                        "name": "name",
                        "type": {
                            "kind": "NON_NULL",
                            "name": null,
                            "ofType": {"kind": "SCALAR", "name": "String", "ofType": null},
                        },
                    },
                    {
                        "name": "tags",
                        "type": {
                            "kind": "LIST",
                            "name": null,
                            "ofType": {"kind": "NON_NULL", "name": null, "ofType": {"name": "String"}},
                        },
                    },
                ],
            },
        }));
    }

    #[tokio::test]
    async fn unknown_type_is_null() {
        let data = introspect("{ __type(name: \"Nope\") { name } }").await;
        assert_eq!(data, json!({"__type": null}));
    }

    #[tokio::test]
    async fn kind_specific_fields_are_null_elsewhere() {
        let data = introspect(
            "{ __type(name: \"Role\") { kind fields { name } interfaces { name } possibleTypes { name } inputFields { name } } }",
        ).await;
        assert_eq!(data, json!({
            "__type": {
                "kind": "ENUM",
                "fields": null,
                "interfaces": null,
                "possibleTypes": null,
                "inputFields": null,
            },
        }));
    }

    #[tokio::test]
    async fn possible_types_of_abstract_types() {
        let data = introspect(
            "{ result: __type(name: \"SearchResult\") { kind possibleTypes { name } }
               iface: __type(name: \"Node\") { kind possibleTypes { name } } }",
        ).await;
        assert_eq!(data, json!({
            "result": {"kind": "UNION", "possibleTypes": [{"name": "User"}, {"name": "Post"}]},
            "iface": {"kind": "INTERFACE", "possibleTypes": [{"name": "User"}, {"name": "Post"}]},
        }));
    }

    #[tokio::test]
    async fn scalar_specified_by_url() {
        let data = introspect(
            "{ date: __type(name: \"Date\") { kind specifiedByURL }
               int: __type(name: \"Int\") { kind specifiedByURL } }",
        ).await;
        assert_eq!(data, json!({
            "date": {"kind": "SCALAR", "specifiedByURL": "https://example.com/date"},
            "int": {"kind": "SCALAR", "specifiedByURL": null},
        }));
    }
}

// =========================================================

mod deprecation {
    use super::*;

    #[tokio::test]
    async fn deprecated_fields_are_hidden_by_default() {
        let data = introspect(
            "{ __type(name: \"Query\") {
                 fields { name }
                 all: fields(includeDeprecated: true) { name isDeprecated deprecationReason }
               } }",
        ).await;
        assert_eq!(data, json!({
            "__type": {
                "fields": [{"name": "user"}, {"name": "search"}],
                "all": [
                    {"name": "user", "isDeprecated": false, "deprecationReason": null},
                    {"name": "search", "isDeprecated": false, "deprecationReason": null},
                    {"name": "legacy", "isDeprecated": true, "deprecationReason": "Use user"},
                    {"name": "old", "isDeprecated": true, "deprecationReason": "No longer supported"},
                ],
            },
        }));
    }

    #[tokio::test]
    async fn deprecated_enum_values() {
        let data = introspect(
            "{ __type(name: \"Role\") {
                 enumValues { name }
                 all: enumValues(includeDeprecated: true) { name isDeprecated deprecationReason }
               } }",
        ).await;
        assert_eq!(data, json!({
            "__type": {
                "enumValues": [{"name": "ADMIN"}],
                "all": [
                    {"name": "ADMIN", "isDeprecated": false, "deprecationReason": null},
                    {"name": "GUEST", "isDeprecated": true, "deprecationReason": "Gone"},
                ],
            },
        }));
    }
}

// =========================================================

mod input_values {
    use super::*;

    #[tokio::test]
    async fn field_arguments_with_defaults() {
        let data = introspect(
            "{ __type(name: \"Query\") { fields { name args { name defaultValue type { kind } } } } }",
        ).await;
        assert_eq!(data["__type"]["fields"], json!([
            {"name": "user", "args": [{"name": "id", "defaultValue": null, "type": {"kind": "NON_NULL"}}]},
            {
                "name": "search",
                "args": [
                    {"name": "term", "defaultValue": "\"a\"", "type": {"kind": "NON_NULL"}},
                    {"name": "limit", "defaultValue": "10", "type": {"kind": "SCALAR"}},
                ],
            },
        ]));
    }

    #[tokio::test]
    async fn input_object_fields() {
        let data = introspect(
            "{ __type(name: \"Filter\") { kind inputFields { name defaultValue type { kind name } } } }",
        ).await;
        assert_eq!(data, json!({
            "__type": {
                "kind": "INPUT_OBJECT",
                "inputFields": [
                    {"name": "role", "defaultValue": "GUEST", "type": {"kind": "ENUM", "name": "Role"}},
                    {"name": "names", "defaultValue": "[\"a\"]", "type": {"kind": "LIST", "name": null}},
                ],
            },
        }));
    }
}
