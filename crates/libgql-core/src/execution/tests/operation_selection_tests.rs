use crate::execution::ExecutionError;
use crate::execution::ExecutionRequest;
use crate::execution::tests::utils::parse_doc;
use crate::execution::tests::utils::root_value;
use crate::execution::tests::utils::setup_schema;
use crate::execution::tests::utils::try_run;
use crate::operation::OperationKind;
use crate::schema::Schema;
use serde_json::json;
use std::sync::Arc;

const TWO_OPERATIONS: &str = "query A { version } query B { me { id } }";

#[tokio::test]
async fn document_without_operations() {
    let result = try_run(
        &setup_schema(),
        "fragment F on Query { version }",
        json!({}),
        json!({}),
    ).await;
    let err = result.unwrap_err();
    assert_eq!(err, ExecutionError::NoOperations);
    assert_eq!(err.to_string(), "The document does not contain any operations.");
}

#[tokio::test]
async fn several_operations_need_a_name() {
    let result = try_run(&setup_schema(), TWO_OPERATIONS, json!({}), json!({})).await;
    assert_eq!(result.unwrap_err(), ExecutionError::OperationNameRequired);
}

#[tokio::test]
async fn named_operation_is_selected() {
    let request = ExecutionRequest::new(setup_schema(), parse_doc(TWO_OPERATIONS))
        .with_operation_name("B")
        .with_root_value(root_value());
    let response = crate::execute(request).await.unwrap();
    assert_eq!(response.data, json!({"me": {"id": "1"}}));
}

#[tokio::test]
async fn unknown_operation_name() {
    let request = ExecutionRequest::new(setup_schema(), parse_doc(TWO_OPERATIONS))
        .with_operation_name("C");
    let err = crate::execute(request).await.unwrap_err();
    assert_eq!(err.to_string(), "Unknown operation named 'C'.");
    assert_eq!(err.errors().len(), 1);
}

#[tokio::test]
async fn missing_root_type() {
    let schema = Arc::new(Schema::parse("type Query { a: Int }").unwrap());
    let request = ExecutionRequest::new(schema, parse_doc("mutation { a }"));
    let err = crate::execute(request).await.unwrap_err();
    assert_eq!(err, ExecutionError::MissingRootType(OperationKind::Mutation));
    assert_eq!(err.to_string(), "Schema does not define a mutation root type.");
}

#[tokio::test]
async fn root_value_defaults_to_empty_object() {
    let request = ExecutionRequest::new(setup_schema(), parse_doc("{ count __typename }"));
    let response = crate::execute(request).await.unwrap();
    assert_eq!(response.data, json!({"count": null, "__typename": "Query"}));
}
