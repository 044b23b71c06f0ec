//! A GraphQL lexer and recursive-descent parser for schema documents,
//! executable documents, and documents that mix both together.
//!
//! Parsing stops at the first error and reports it as a
//! [`GraphQLParseError`] carrying an exact [`GraphQLSourceSpan`], an
//! expectation message, and optional help notes.
//!
//! ```rust
//! let doc = libgql_parser::parse("type Query { hello: String }").unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod reserved_name_context;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

/// Parses `source` as a (possibly mixed) GraphQL document.
pub fn parse(source: &str) -> Result<ast::Document<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

#[cfg(test)]
mod tests;
