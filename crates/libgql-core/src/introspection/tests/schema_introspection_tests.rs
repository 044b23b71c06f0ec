use crate::introspection::tests::utils::introspect;
use serde_json::Value as JsonValue;
use serde_json::json;

fn names(list: &JsonValue) -> Vec<&str> {
    list.as_array()
        .map(|items| items.iter().filter_map(|item| item["name"].as_str()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn root_operation_types() {
    let data = introspect(
        "{ __schema { queryType { name } mutationType { name } subscriptionType { name } } }",
    ).await;
    assert_eq!(data, json!({
        "__schema": {
            "queryType": {"name": "Query"},
            "mutationType": {"name": "Mutation"},
            "subscriptionType": null,
        },
    }));
}

#[tokio::test]
async fn types_include_built_ins_and_keep_definition_order() {
    let data = introspect("{ __schema { types { name kind } } }").await;
    let type_names = names(&data["__schema"]["types"]);
    for expected in ["String", "Boolean", "__Schema", "__TypeKind", "Date", "Filter"] {
        assert!(type_names.contains(&expected), "missing {expected}");
    }
    let position = |name: &str| type_names.iter().position(|candidate| *candidate == name);
    assert!(position("Int") < position("Query"));
    assert!(position("Query") < position("Mutation"));
    assert!(position("Mutation") < position("User"));
    assert!(position("User") < position("SearchResult"));
}

#[tokio::test]
async fn directives() {
    let data = introspect(
        "{ __schema { directives { name isRepeatable locations args { name defaultValue type { name } } } } }",
    ).await;
    let directives = &data["__schema"]["directives"];
    let directive_names = names(directives);
    for expected in ["skip", "include", "deprecated", "specifiedBy", "auth"] {
        assert!(directive_names.contains(&expected), "missing @{expected}");
    }

    let auth = directives
        .as_array()
        .and_then(|items| items.iter().find(|item| item["name"] == "auth"))
        .cloned();
    assert_eq!(auth, Some(json!({
        "name": "auth",
        "isRepeatable": true,
        "locations": ["FIELD_DEFINITION", "OBJECT"],
        "args": [{"name": "role", "defaultValue": "ADMIN", "type": {"name": "Role"}}],
    })));
}

#[tokio::test]
async fn typename_on_introspection_types() {
    let data = introspect("{ __typename __schema { __typename queryType { __typename } } }").await;
    assert_eq!(data, json!({
        "__typename": "Query",
        "__schema": {"__typename": "__Schema", "queryType": {"__typename": "__Type"}},
    }));
}

#[tokio::test]
async fn full_introspection_query_validates_and_executes() {
    let data = introspect(
        "query IntrospectionQuery {
           __schema {
             queryType { name }
             types { ...FullType }
             directives { name locations args { ...InputValue } }
           }
         }
         fragment FullType on __Type {
           kind name description specifiedByURL
           fields(includeDeprecated: true) {
             name description args { ...InputValue } type { ...TypeRef }
             isDeprecated deprecationReason
           }
           inputFields { ...InputValue }
           interfaces { ...TypeRef }
           enumValues(includeDeprecated: true) { name isDeprecated deprecationReason }
           possibleTypes { ...TypeRef }
         }
         fragment InputValue on __InputValue { name description type { ...TypeRef } defaultValue }
         fragment TypeRef on __Type { kind name ofType { kind name ofType { kind name } } }",
    ).await;
    assert_eq!(data["__schema"]["queryType"], json!({"name": "Query"}));
    assert!(data["__schema"]["types"].as_array().is_some_and(|types| types.len() > 15));
}
