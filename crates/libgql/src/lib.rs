pub use libgql_core::*;

/// The lexer, parser, and AST that the rest of the engine is built on.
/// Most callers only need [`Schema::parse`](crate::schema::Schema::parse)
/// and [`Document::parse`](crate::operation::Document::parse).
pub mod parser {
    pub use libgql_parser::*;
}
