//! Field collection, value completion, and null propagation through the
//! default property resolvers.

use crate::execution::tests::utils::error_messages;
use crate::execution::tests::utils::error_paths;
use crate::execution::tests::utils::root_value;
use crate::execution::tests::utils::run;
use crate::execution::tests::utils::run_with_variables;
use crate::execution::tests::utils::setup_schema;
use serde_json::json;

mod collection {
    use super::*;

    #[tokio::test]
    async fn typename_serializes_as_standard_response() {
        let response = run(&setup_schema(), "{ __typename }", json!({})).await;
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"data":{"__typename":"Query"},"errors":[]}"#,
        );
    }

    #[tokio::test]
    async fn nested_selections_and_aliases_keep_selection_order() {
        let response = run(
            &setup_schema(),
            "{ me { id handle: name friends { name } } version }",
            root_value(),
        ).await;
        assert!(response.is_ok());
        assert_eq!(
            serde_json::to_string(&response.data).unwrap(),
            r#"{"me":{"id":"1","handle":"Ada","friends":[{"name":"Grace"}]},"version":"1.0"}"#,
        );
    }

    #[tokio::test]
    async fn fragments_merge_into_one_object() {
        let response = run(
            &setup_schema(),
            "{ me { ...F ... on User { name } id } }\nfragment F on User { id }",
            root_value(),
        ).await;
        assert_eq!(
            serde_json::to_string(&response.data).unwrap(),
            r#"{"me":{"id":"1","name":"Ada"}}"#,
        );
    }

    #[tokio::test]
    async fn repeated_fields_merge_subselections() {
        let response = run(
            &setup_schema(),
            "{ me { friends { id } friends { name } } }",
            root_value(),
        ).await;
        assert_eq!(response.data, json!({
            "me": {"friends": [{"id": "2", "name": "Grace"}]},
        }));
    }

    #[tokio::test]
    async fn skip_and_include() {
        let response = run_with_variables(
            &setup_schema(),
            "query Q($skip: Boolean!) { me { id name @skip(if: $skip) nickname @include(if: false) } }",
            root_value(),
            json!({"skip": true}),
        ).await;
        assert_eq!(response.data, json!({"me": {"id": "1"}}));
    }

    #[tokio::test]
    async fn skipped_fragment_spread() {
        let response = run(
            &setup_schema(),
            "{ me { id ...F @skip(if: true) } }\nfragment F on User { name }",
            root_value(),
        ).await;
        assert_eq!(response.data, json!({"me": {"id": "1"}}));
    }

    #[tokio::test]
    async fn missing_nullable_properties_are_null() {
        let response = run(&setup_schema(), "{ me { nickname } broken }", root_value()).await;
        assert!(response.is_ok());
        assert_eq!(response.data, json!({"me": {"nickname": null}, "broken": null}));
    }

    #[tokio::test]
    async fn fields_the_type_does_not_define_are_omitted() {
        let response = run(&setup_schema(), "{ version nope }", root_value()).await;
        assert!(response.is_ok());
        assert_eq!(response.data, json!({"version": "1.0"}));
    }
}

// =========================================================

mod null_propagation {
    use super::*;

    #[tokio::test]
    async fn null_in_non_null_field_nulls_nearest_nullable_parent() {
        let response = run(
            &setup_schema(),
            "{ me { id name } version }",
            json!({"me": {"id": "1"}, "version": "1.0"}),
        ).await;
        assert_eq!(response.data, json!({"me": null, "version": "1.0"}));
        assert_eq!(error_messages(&response), vec![
            "Cannot return null for non-nullable field 'User.name'.",
        ]);
        assert_eq!(error_paths(&response), vec!["me.name"]);
        assert_eq!(
            (response.errors[0].locations[0].line, response.errors[0].locations[0].column),
            (1, 11),
        );
    }

    #[tokio::test]
    async fn null_at_non_null_root_field_nulls_data() {
        let response = run(&setup_schema(), "{ version brokenRequired }", root_value()).await;
        assert_eq!(response.data, json!(null));
        assert_eq!(error_messages(&response), vec![
            "Cannot return null for non-nullable field 'Query.brokenRequired'.",
        ]);
        assert_eq!(error_paths(&response), vec!["brokenRequired"]);
    }

    #[tokio::test]
    async fn null_list_item_propagates_through_non_null_items() {
        let response = run(
            &setup_schema(),
            "{ me { friends { id name } } }",
            json!({"me": {"friends": [{"id": "2", "name": "Grace"}, {"id": "3"}]}}),
        ).await;
        assert_eq!(response.data, json!({"me": null}));
        assert_eq!(error_paths(&response), vec!["me.friends[1].name"]);
    }

    #[tokio::test]
    async fn non_list_value_for_list_field() {
        let response = run(&setup_schema(), "{ tags version }", json!({
            "tags": "solo",
            "version": "1.0",
        })).await;
        assert_eq!(response.data, json!({"tags": null, "version": "1.0"}));
        assert_eq!(error_messages(&response), vec![
            "Expected a list, but did not find one for field 'Query.tags'.",
        ]);
    }

    #[tokio::test]
    async fn nullable_list_items() {
        let response = run(&setup_schema(), "{ tags }", json!({"tags": ["a", null, "b"]})).await;
        assert!(response.is_ok());
        assert_eq!(response.data, json!({"tags": ["a", null, "b"]}));
    }

    #[tokio::test]
    async fn leaf_values_that_cannot_serialize() {
        let response = run(&setup_schema(), "{ count status }", json!({
            "count": "many",
            "status": "GONE",
        })).await;
        assert_eq!(response.data, json!({"count": null, "status": null}));
        assert_eq!(error_messages(&response), vec![
            "Int cannot represent non-integer value: \"many\"",
            "Enum 'Status' cannot represent value: \"GONE\"",
        ]);
        assert_eq!(error_paths(&response), vec!["count", "status"]);
    }

    #[tokio::test]
    async fn leaf_values_are_serialized() {
        let response = run(&setup_schema(), "{ count version }", json!({
            "count": 3.0,
            "version": 2,
        })).await;
        assert!(response.is_ok());
        assert_eq!(response.data, json!({"count": 3, "version": "2"}));
    }

    #[tokio::test]
    async fn conflicting_merged_fields_are_field_errors() {
        let response = run(&setup_schema(), "{ me { id: name id } }", root_value()).await;
        assert_eq!(response.data, json!({"me": null}));
        assert_eq!(error_paths(&response), vec!["me.id"]);
    }
}

// =========================================================

mod abstract_types {
    use super::*;

    #[tokio::test]
    async fn typename_selects_runtime_type() {
        let response = run(
            &setup_schema(),
            "{ search(term: \"a\") { __typename ... on User { name } ... on Post { title } } }",
            root_value(),
        ).await;
        assert!(response.is_ok());
        assert_eq!(response.data, json!({
            "search": [
                {"__typename": "User", "name": "Ada"},
                {"__typename": "Post", "title": "Notes"},
            ],
        }));
    }

    #[tokio::test]
    async fn interface_fields_resolve_on_runtime_type() {
        let response = run(
            &setup_schema(),
            "{ node(id: 9) { id ... on Post { title } } }",
            json!({"node": {"__typename": "Post", "id": "9", "title": "Notes"}}),
        ).await;
        assert_eq!(response.data, json!({"node": {"id": "9", "title": "Notes"}}));
    }

    #[tokio::test]
    async fn missing_typename() {
        let response = run(
            &setup_schema(),
            "{ search(term: \"a\") { __typename } }",
            json!({"search": [{"id": "1"}]}),
        ).await;
        assert_eq!(response.data, json!(null));
        assert_eq!(error_messages(&response), vec![
            "Abstract type 'SearchResult' must resolve to an Object type at runtime. Either the \
             'SearchResult' type should have a type resolver or the value should include a \
             '__typename'.",
        ]);
        assert_eq!(error_paths(&response), vec!["search[0]"]);
    }

    #[tokio::test]
    async fn runtime_type_outside_the_abstract_type() {
        let response = run(
            &setup_schema(),
            "{ node(id: 1) { id } }",
            json!({"node": {"__typename": "Query"}}),
        ).await;
        assert_eq!(response.data, json!({"node": null}));
        assert_eq!(error_messages(&response), vec![
            "Runtime Object type 'Query' is not a possible type for 'Node'.",
        ]);
    }
}
