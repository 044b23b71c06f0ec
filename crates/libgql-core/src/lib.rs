//! The domain layer of `libgql`: builds resolved [`Schema`](schema::Schema)s
//! and executable [`Document`](operation::Document)s from parsed GraphQL,
//! validates documents against schemas, and executes operations
//! asynchronously.
//!
//! ```rust
//! use libgql_core::operation::Document;
//! use libgql_core::schema::Schema;
//!
//! let schema = Schema::parse("type Query { id: ID! }").unwrap();
//! let document = Document::parse("{ foo }", None).unwrap();
//! let errors = libgql_core::validate(&document, &schema);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     (errors[0].locations[0].line, errors[0].locations[0].column),
//!     (1, 3),
//! );
//! ```

mod argument;
mod ast_conversion_error;
mod directive_annotation;
mod directive_annotation_builder;
mod error;
pub mod execution;
mod introspection;
pub mod loc;
pub mod metadata;
mod named_ref;
pub mod operation;
pub mod schema;
pub mod types;
pub mod validation;
mod value;

pub use argument::Argument;
pub use ast_conversion_error::AstConversionError;
pub use directive_annotation::DirectiveAnnotation;
pub use directive_annotation_builder::DirectiveAnnotationBuilder;
pub use error::ErrorLocation;
pub use error::GError;
pub use error::GPath;
pub use error::PathSegment;
pub use execution::execute;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use validation::validate;
pub use value::Value;
