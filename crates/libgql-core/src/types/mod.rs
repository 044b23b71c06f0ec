mod argument_definition;
mod deprecation_state;
mod directive_definition;
mod enum_type;
mod field_definition;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod resolved_type;
mod scalar_type;
mod type_builder;
mod type_ref;
mod union_type;

pub use argument_definition::ArgumentDefinition;
pub use deprecation_state::DEFAULT_DEPRECATION_REASON;
pub use deprecation_state::DeprecationState;
pub use directive_definition::DirectiveDefinition;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field_definition::FieldDefinition;
pub use graphql_type::GraphQLType;
pub use graphql_type::TypeDefinition;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub(crate) use resolved_type::possible_type_names;
pub use resolved_type::NamedGraphQLTypeRef;
pub use resolved_type::ResolvedType;
pub use scalar_type::ScalarType;
pub(crate) use type_builder::check_reserved_name;
pub(crate) use type_builder::TypeBuilder;
pub use type_ref::NamedTypeRef;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
