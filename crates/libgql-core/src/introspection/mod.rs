//! Resolvers for the introspection system: the `__schema`, `__type` and
//! `__typename` meta-fields and every field of the `__Schema`, `__Type`,
//! `__Field`, `__InputValue`, `__EnumValue` and `__Directive` types.
//!
//! The introspection types themselves are ordinary (built-in) object types
//! declared in SDL. Their values are small JSON "handles" that name the
//! schema element being described, and the resolvers here look that element
//! up in the [`Schema`](crate::schema::Schema) on demand:
//!
//! | type | handle |
//! |---|---|
//! | `__Schema` | `{}` |
//! | `__Type` | `{"name": T}` or `{"kind": "LIST" \| "NON_NULL", "ofType": <__Type>}` |
//! | `__Field` | `{"type": T, "field": F}` |
//! | `__InputValue` | `{"type": T, "field": F, "name": A}`, `{"type": T, "name": A}` or `{"directive": D, "name": A}` |
//! | `__EnumValue` | `{"type": T, "name": V}` |
//! | `__Directive` | `{"name": D}` |
//!
//! https://spec.graphql.org/October2021/#sec-Introspection

mod resolvers;

use crate::execution::FIELD_RESOLVER;
use crate::execution::ResolverChain;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinitions;
use crate::types::ArgumentDefinition;
use crate::types::FieldDefinition;
use crate::types::GraphQLTypeKind;
use crate::types::ResolvedType;
use indexmap::IndexMap;
use resolvers::IntrospectionResolver;

/// Attaches a resolver to every field of the built-in introspection types.
pub(crate) fn attach_resolvers(defs: &mut SchemaDefinitions) -> Result<(), SchemaBuildError> {
    for (type_name, field_name, resolve) in resolvers::FIELD_RESOLVERS {
        defs.set_field_resolver(type_name, field_name, IntrospectionResolver(*resolve))?;
    }
    Ok(())
}

/// The `__typename`, `__schema` and `__type` meta-fields. They are not part
/// of any type's field map;
/// [`Schema::field_definition()`](crate::schema::Schema::field_definition)
/// falls back to them.
pub(crate) fn meta_field_definitions() -> IndexMap<String, FieldDefinition> {
    let mut type_args = IndexMap::new();
    type_args.insert("name".to_string(), ArgumentDefinition {
        arg_type: ResolvedType::non_null(ResolvedType::named("String", GraphQLTypeKind::String)),
        default_value: None,
        description: None,
        directives: vec![],
        location: SourceLocation::BuiltIn,
        metadata: Metadata::new(),
        name: "name".to_string(),
    });

    [
        meta_field(
            "__typename",
            "The name of the current Object type at runtime.",
            ResolvedType::non_null(ResolvedType::named("String", GraphQLTypeKind::String)),
            IndexMap::new(),
            resolvers::typename,
        ),
        meta_field(
            "__schema",
            "Access the current type schema of this server.",
            ResolvedType::non_null(ResolvedType::named("__Schema", GraphQLTypeKind::Object)),
            IndexMap::new(),
            resolvers::schema,
        ),
        meta_field(
            "__type",
            "Request the type information of a single type.",
            ResolvedType::named("__Type", GraphQLTypeKind::Object),
            type_args,
            resolvers::type_by_name,
        ),
    ]
    .into_iter()
    .map(|field_def| (field_def.name.clone(), field_def))
    .collect()
}

fn meta_field(
    name: &str,
    description: &str,
    field_type: ResolvedType,
    arguments: IndexMap<String, ArgumentDefinition>,
    resolve: resolvers::IntrospectionFn,
) -> FieldDefinition {
    let mut metadata = Metadata::new();
    metadata.insert(&FIELD_RESOLVER, ResolverChain::single(IntrospectionResolver(resolve)));
    FieldDefinition {
        arguments,
        description: Some(description.to_string()),
        directives: vec![],
        field_type,
        location: SourceLocation::BuiltIn,
        metadata,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests;
