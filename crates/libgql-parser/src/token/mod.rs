//! This module provides the core token types used by GraphQL lexers and the
//! parser.

mod graphql_token;
mod graphql_token_kind;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;

#[cfg(test)]
mod tests;
