//! Shared helpers for validation tests.

use crate::GError;
use crate::operation::Document;
use crate::schema::Schema;
use crate::validation::ValidationOptions;
use crate::validation::ValidationRule;
use crate::validation::Validator;

pub const SCHEMA_SDL: &str = r#"
type Query {
  me: User
  user(id: ID!): User
  users(first: Int = 10, filter: UserFilter): [User!]!
  node(id: ID!): Node
  search(term: String!): [SearchResult!]!
  pet: Pet
  status: Status
}

type Mutation {
  rename(name: String!): User
}

type Subscription {
  userAdded: User
  postAdded: Post
}

interface Node {
  id: ID!
}

type User implements Node {
  id: ID!
  name: String!
  nickname: String
  friends: [User!]!
  posts: [Post!]!
}

type Post implements Node {
  id: ID!
  title: String!
  author: User!
}

union SearchResult = User | Post

interface Pet {
  name: String
}

type Dog implements Pet {
  name: String
  barkVolume: Int
}

type Cat implements Pet {
  name: String
  meowVolume: Int
}

enum Status {
  ACTIVE
  INACTIVE
}

input UserFilter {
  status: Status
  nameContains: String
  minAge: Int!
}

directive @cached(ttl: Int!) on FIELD
directive @tag(name: String) repeatable on FIELD
"#;

pub fn setup_schema() -> Schema {
    Schema::parse(SCHEMA_SDL).expect("test schema builds")
}

pub fn parse_doc(source: &str) -> Document {
    match Document::parse(source, None) {
        Ok(doc) => doc,
        Err(err) => panic!("expected `{source}` to build: {err}"),
    }
}

/// Runs every standard rule over `source` against the test schema.
pub fn validate(source: &str) -> Vec<GError> {
    Validator::new().validate(&parse_doc(source), &setup_schema())
}

/// Runs only `rule` over `source` against the test schema.
pub fn check_rule(rule: impl ValidationRule + 'static, source: &str) -> Vec<GError> {
    check_rule_with_options(rule, ValidationOptions::default(), source)
}

pub fn check_rule_with_options(
    rule: impl ValidationRule + 'static,
    options: ValidationOptions,
    source: &str,
) -> Vec<GError> {
    Validator::with_options(options)
        .with_rules(vec![Box::new(rule)])
        .validate(&parse_doc(source), &setup_schema())
}

pub fn messages(errors: &[GError]) -> Vec<&str> {
    errors.iter().map(|error| error.message.as_str()).collect()
}

pub fn locations(error: &GError) -> Vec<(usize, usize)> {
    error.locations.iter().map(|loc| (loc.line, loc.column)).collect()
}
