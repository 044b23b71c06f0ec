mod object_or_interface_type_validator;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_definitions;
mod type_registry;

use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_definitions::SchemaDefinitions;
pub use type_registry::TypeRegistry;

#[cfg(test)]
mod tests;
