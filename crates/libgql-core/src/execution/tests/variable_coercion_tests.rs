//! Coercion of request variables before execution starts.

use crate::GError;
use crate::execution::resolver_fn;
use crate::execution::tests::utils::root_value;
use crate::execution::tests::utils::run_with_variables;
use crate::execution::tests::utils::schema_definitions;
use crate::execution::tests::utils::setup_schema;
use crate::execution::tests::utils::try_run;
use serde_json::Value as JsonValue;
use serde_json::json;
use std::sync::Arc;

async fn coercion_errors(source: &str, vars: JsonValue) -> Vec<GError> {
    match try_run(&setup_schema(), source, root_value(), vars).await {
        Ok(response) => panic!("expected variable coercion to fail, got {response:?}"),
        Err(err) => err.errors(),
    }
}

fn messages(errors: &[GError]) -> Vec<&str> {
    errors.iter().map(|error| error.message.as_str()).collect()
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn required_variable_not_provided() {
        let errors = coercion_errors("query Q($id: ID!) { node(id: $id) { id } }", json!({})).await;
        assert_eq!(messages(&errors), vec![
            "Variable '$id' of required type 'ID!' was not provided.",
        ]);
        assert_eq!((errors[0].locations[0].line, errors[0].locations[0].column), (1, 9));
    }

    #[tokio::test]
    async fn null_for_non_null_variable() {
        let errors = coercion_errors(
            "query Q($id: ID!) { node(id: $id) { id } }",
            json!({"id": null}),
        ).await;
        assert_eq!(messages(&errors), vec![
            "Variable '$id' of non-null type 'ID!' must not be null.",
        ]);
    }

    #[tokio::test]
    async fn invalid_values() {
        let errors = coercion_errors(
            "query Q($a: Int, $b: Int, $c: String, $d: ID) { version }",
            json!({"a": "x", "b": 3000000000u64, "c": 1, "d": 1.5}),
        ).await;
        assert_eq!(messages(&errors), vec![
            "Variable '$a' got invalid value \"x\"; Int cannot represent non-integer value: \"x\".",
            "Variable '$b' got invalid value 3000000000; Int cannot represent non 32-bit signed \
             integer value: 3000000000.",
            "Variable '$c' got invalid value 1; String cannot represent a non string value: 1.",
            "Variable '$d' got invalid value 1.5; ID cannot represent value: 1.5.",
        ]);
    }

    #[tokio::test]
    async fn unknown_and_output_variable_types() {
        let errors = coercion_errors(
            "query Q($w: Widget, $u: User) { version }",
            json!({}),
        ).await;
        assert_eq!(messages(&errors), vec![
            "Variable '$w' expected value of unknown type 'Widget'.",
            "Variable '$u' expected value of type 'User' which cannot be used as an input type.",
        ]);
    }

    #[tokio::test]
    async fn enum_variable_outside_the_enum() {
        let errors = coercion_errors(
            "query Q($s: Status) { version }",
            json!({"s": "GONE"}),
        ).await;
        assert_eq!(messages(&errors), vec![
            "Variable '$s' got invalid value \"GONE\"; Value \"GONE\" does not exist in 'Status' enum.",
        ]);
    }

    #[tokio::test]
    async fn request_error_joins_messages() {
        let result = try_run(
            &setup_schema(),
            "query Q($a: Int!, $b: Int!) { version }",
            json!({}),
            json!({}),
        ).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Variable '$a' of required type 'Int!' was not provided. Variable '$b' of required \
             type 'Int!' was not provided.",
        );
    }
}

// =========================================================

mod coerced_values {
    use super::*;

    #[tokio::test]
    async fn defaults_apply_to_missing_variables() {
        let response = run_with_variables(
            &setup_schema(),
            "query Q($flag: Boolean = false) { version count @include(if: $flag) }",
            root_value(),
            json!({}),
        ).await;
        assert_eq!(response.data, json!({"version": "1.0"}));
    }

    #[tokio::test]
    async fn integer_ids_become_strings() {
        let mut defs = schema_definitions();
        defs.set_field_resolver(
            "Query",
            "node",
            resolver_fn(|_parent, args, _info| async move {
                Ok(json!({"__typename": "User", "id": args.get("id").cloned()}))
            }),
        ).unwrap();
        let schema = Arc::new(defs.build().unwrap());

        let response = run_with_variables(
            &schema,
            "query Q($id: ID!) { node(id: $id) { id } }",
            json!({}),
            json!({"id": 7}),
        ).await;
        assert_eq!(response.data, json!({"node": {"id": "7"}}));
    }

    #[tokio::test]
    async fn single_value_coerces_to_list() {
        let mut defs = schema_definitions();
        defs.load_str(None, "extend type Query { echo(values: [Int!]): [Int!] }").unwrap();
        defs.set_field_resolver(
            "Query",
            "echo",
            resolver_fn(|_parent, args, _info| async move {
                Ok(args.get("values").cloned().unwrap_or(JsonValue::Null))
            }),
        ).unwrap();
        let schema = Arc::new(defs.build().unwrap());

        let response = run_with_variables(
            &schema,
            "query Q($v: [Int!]) { echo(values: $v) }",
            json!({}),
            json!({"v": 4}),
        ).await;
        assert_eq!(response.data, json!({"echo": [4]}));
    }
}
