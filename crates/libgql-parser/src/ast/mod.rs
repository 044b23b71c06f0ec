//! AST types for parsed GraphQL documents.
//!
//! All node types are parameterized over a `'src` lifetime that borrows
//! strings from the source text via [`Cow<'src, str>`]. Every node carries a
//! [`GraphQLSourceSpan`] and implements [`AstNode`], which maps the node
//! back to its source text.
//!
//! ```rust
//! use libgql_parser::ast;
//! use libgql_parser::GraphQLParser;
//!
//! let source = "query Q { hello }";
//! let doc = GraphQLParser::new(source).parse_document().unwrap();
//! let ast::Definition::Operation(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(op.selection_set.to_source(source), "{ hello }");
//! ```
//!
//! [`Cow<'src, str>`]: std::borrow::Cow
//! [`GraphQLSourceSpan`]: crate::GraphQLSourceSpan

mod ast_node;
mod document;
mod executable_defs;
mod shared_nodes;
mod type_annotation;
mod type_extensions;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationKind;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::TypeCondition;
pub use executable_defs::VariableDefinition;
pub use shared_nodes::Argument;
pub use shared_nodes::DirectiveAnnotation;
pub use shared_nodes::EnumValueDefinition;
pub use shared_nodes::FieldDefinition;
pub use shared_nodes::InputValueDefinition;
pub use shared_nodes::Name;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::Nullability;
pub use type_annotation::TypeAnnotation;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::TypeExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::DirectiveLocation;
pub use type_system_defs::DirectiveLocationKind;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::VariableValue;
