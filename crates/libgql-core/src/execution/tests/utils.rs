use crate::execution::ExecutionError;
use crate::execution::ExecutionRequest;
use crate::execution::ExecutionResponse;
use crate::operation::Document;
use crate::schema::Schema;
use crate::schema::SchemaDefinitions;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use serde_json::json;
use std::sync::Arc;

pub const SCHEMA_SDL: &str = "
type Query {
  me: User
  users(first: Int = 2): [User!]!
  search(term: String!): [SearchResult!]!
  node(id: ID!): Node
  version: String!
  broken: String
  brokenRequired: String!
  count: Int
  status: Status
  tags: [String]
  shout(text: Upper): Upper
}

type Mutation {
  increment(by: Int = 1): Int!
  fail: Int!
}

interface Node { id: ID! }

type User implements Node {
  id: ID!
  name: String!
  nickname: String
  friends: [User!]!
  status: Status
}

type Post implements Node {
  id: ID!
  title: String!
}

union SearchResult = User | Post

enum Status { ACTIVE INACTIVE }

scalar Upper
";

/// A root value the default resolvers can serve most queries from.
pub fn root_value() -> JsonValue {
    json!({
        "me": {
            "id": "1",
            "name": "Ada",
            "nickname": null,
            "friends": [{"id": "2", "name": "Grace", "friends": []}],
            "status": "ACTIVE",
        },
        "search": [
            {"__typename": "User", "id": "1", "name": "Ada"},
            {"__typename": "Post", "id": "9", "title": "Notes"},
        ],
        "version": "1.0",
    })
}

pub fn schema_definitions() -> SchemaDefinitions {
    SchemaDefinitions::parse(SCHEMA_SDL).expect("test schema parses")
}

pub fn setup_schema() -> Arc<Schema> {
    Arc::new(schema_definitions().build().expect("test schema builds"))
}

pub fn parse_doc(source: &str) -> Arc<Document> {
    match Document::parse(source, None) {
        Ok(document) => Arc::new(document),
        Err(err) => panic!("failed to parse test document: {err}"),
    }
}

pub fn variables(value: JsonValue) -> JsonMap<String, JsonValue> {
    match value {
        JsonValue::Object(map) => map,
        other => panic!("variables must be an object, got {other}"),
    }
}

pub async fn try_run(
    schema: &Arc<Schema>,
    source: &str,
    root: JsonValue,
    vars: JsonValue,
) -> Result<ExecutionResponse, ExecutionError> {
    let request = ExecutionRequest::new(schema.clone(), parse_doc(source))
        .with_root_value(root)
        .with_variables(variables(vars));
    crate::execute(request).await
}

/// Executes `source` against `root`, failing the test on request errors.
pub async fn run(schema: &Arc<Schema>, source: &str, root: JsonValue) -> ExecutionResponse {
    run_with_variables(schema, source, root, json!({})).await
}

pub async fn run_with_variables(
    schema: &Arc<Schema>,
    source: &str,
    root: JsonValue,
    vars: JsonValue,
) -> ExecutionResponse {
    match try_run(schema, source, root, vars).await {
        Ok(response) => response,
        Err(err) => panic!("request failed: {err}"),
    }
}

pub fn error_paths(response: &ExecutionResponse) -> Vec<String> {
    response
        .errors
        .iter()
        .map(|error| error.path.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect()
}

pub fn error_messages(response: &ExecutionResponse) -> Vec<&str> {
    response.errors.iter().map(|error| error.message.as_str()).collect()
}
