use crate::execution::ExecutionRequest;
use crate::operation::Document;
use crate::schema::Schema;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub const SCHEMA_SDL: &str = r#"
type Query {
  user(id: ID!): User
  search(term: String! = "a", limit: Int = 10): [SearchResult!]!
  legacy: String @deprecated(reason: "Use user")
  old: Int @deprecated
}

type Mutation { noop: Boolean }

interface Node { id: ID! }

"Someone with an account."
type User implements Node {
  id: ID!
  name: String!
  tags: [String!]
}

type Post implements Node { id: ID! }

union SearchResult = User | Post

enum Role {
  ADMIN
  GUEST @deprecated(reason: "Gone")
}

input Filter {
  role: Role = GUEST
  names: [String!] = ["a"]
}

scalar Date @specifiedBy(url: "https://example.com/date")

directive @auth(role: Role = ADMIN) repeatable on FIELD_DEFINITION | OBJECT
"#;

pub fn setup_schema() -> Arc<Schema> {
    Arc::new(Schema::parse(SCHEMA_SDL).expect("introspection test schema builds"))
}

/// Runs `source` and returns its data, failing the test on any error.
pub async fn introspect(source: &str) -> JsonValue {
    let schema = setup_schema();
    let document = Arc::new(Document::parse(source, None).expect("test document parses"));
    let errors = crate::validate(&document, &schema);
    assert_eq!(errors, vec![], "introspection query should validate");

    let response = crate::execute(ExecutionRequest::new(schema, document))
        .await
        .expect("introspection request starts");
    assert_eq!(response.errors, vec![]);
    response.data
}
