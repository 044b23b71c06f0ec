use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinitions;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeRef;
use crate::types::ResolvedType;
use crate::types::TypeDefinition;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Resolves [`TypeRef`]s into [`ResolvedType`]s, building each named type
/// the first time something refers to it.
///
/// A name is memoized before its definition is resolved, so self-referential
/// and mutually-recursive types terminate: a reference back to a type that
/// is still being built gets the memoized [`NamedGraphQLTypeRef`].
///
/// The registry only lives for the duration of a schema build.
#[derive(Debug)]
pub struct TypeRegistry<'defs> {
    definitions: &'defs IndexMap<String, TypeDefinition>,
    refs: HashMap<String, NamedGraphQLTypeRef>,
    resolved: HashMap<String, GraphQLType>,
}
impl<'defs> TypeRegistry<'defs> {
    pub fn new(definitions: &'defs SchemaDefinitions) -> Self {
        Self {
            definitions: &definitions.types,
            refs: HashMap::with_capacity(definitions.types.len()),
            resolved: HashMap::with_capacity(definitions.types.len()),
        }
    }

    pub fn resolve_named(&mut self, named_ref: &NamedTypeRef) -> Result<NamedGraphQLTypeRef> {
        let type_name = named_ref.name();
        if let Some(memoized) = self.refs.get(type_name) {
            return Ok(memoized.clone());
        }

        let definitions = self.definitions;
        let type_def = definitions.get(type_name).ok_or_else(|| {
            SchemaBuildError::UnknownType {
                type_name: type_name.to_string(),
                location: named_ref.ref_location().to_owned(),
            }
        })?;

        tracing::trace!(type_name, "resolving type");
        let resolved_ref = NamedGraphQLTypeRef::new(
            type_name,
            GraphQLTypeKind::from(type_def),
        );
        self.refs.insert(type_name.to_string(), resolved_ref.clone());
        let resolved_type = type_def.resolve(self)?;
        self.resolved.insert(type_name.to_string(), resolved_type);
        Ok(resolved_ref)
    }

    pub fn resolve(&mut self, type_ref: &TypeRef) -> Result<ResolvedType> {
        Ok(match type_ref {
            TypeRef::List(inner) => ResolvedType::List(Box::new(self.resolve(inner)?)),
            TypeRef::Named(named_ref) => ResolvedType::Named(self.resolve_named(named_ref)?),
            TypeRef::NonNull(inner) => ResolvedType::NonNull(Box::new(self.resolve(inner)?)),
        })
    }

    /// Resolves anything not yet reached and returns every type, keyed by
    /// name, in definition order.
    pub fn into_types(mut self) -> Result<IndexMap<String, GraphQLType>> {
        let definitions = self.definitions;
        for (type_name, type_def) in definitions {
            if !self.refs.contains_key(type_name) {
                self.resolve_named(&NamedTypeRef::new(type_name, type_def.location().to_owned()))?;
            }
        }

        let mut types = IndexMap::with_capacity(definitions.len());
        for type_name in definitions.keys() {
            if let Some(resolved_type) = self.resolved.remove(type_name) {
                types.insert(type_name.clone(), resolved_type);
            }
        }
        Ok(types)
    }
}
