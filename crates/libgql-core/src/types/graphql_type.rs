use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ResolvedType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::sync::LazyLock;

static BUILTIN_LOCATION: SourceLocation = SourceLocation::BuiltIn;
static EMPTY_METADATA: LazyLock<Metadata> = LazyLock::new(Metadata::new);

/// Represents a named GraphQL type.
///
/// The five built-in scalars carry no data of their own; every other kind of
/// type wraps its definition. `TType` is the phase of the type references
/// within: [`TypeRef`] while the type is still being defined (see
/// [`TypeDefinition`]), [`ResolvedType`] once it is part of a [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType<TType = ResolvedType> {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType<TType>),
    Int,
    Interface(InterfaceType<TType>),
    Object(ObjectType<TType>),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}

/// A named type as defined in SDL, before its type references are resolved.
pub type TypeDefinition = GraphQLType<TypeRef>;

impl<TType> GraphQLType<TType> {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType<TType>> {
        if let Self::InputObject(input_type) = self {
            Some(input_type)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType<TType>> {
        if let Self::Interface(iface_type) = self {
            Some(iface_type)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType<TType>> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_type) = self {
            Some(union_type)
        } else {
            None
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => &[],
            Self::Enum(t) => t.directives(),
            Self::InputObject(t) => t.directives(),
            Self::Interface(t) => t.directives(),
            Self::Object(t) => t.directives(),
            Self::Scalar(t) => t.directives(),
            Self::Union(t) => t.directives(),
        }
    }

    /// The fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDefinition<TType>>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.location().is_builtin()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => &BUILTIN_LOCATION,
            Self::Enum(t) => t.location(),
            Self::InputObject(t) => t.location(),
            Self::Interface(t) => t.location(),
            Self::Object(t) => t.location(),
            Self::Scalar(t) => t.location(),
            Self::Union(t) => t.location(),
        }
    }

    /// The metadata attached to this type. Built-in scalars never carry
    /// any.
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => &EMPTY_METADATA,
            Self::Enum(t) => t.metadata(),
            Self::InputObject(t) => t.metadata(),
            Self::Interface(t) => t.metadata(),
            Self::Object(t) => t.metadata(),
            Self::Scalar(t) => t.metadata(),
            Self::Union(t) => t.metadata(),
        }
    }

    pub(crate) fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => None,
            Self::Enum(t) => Some(&mut t.metadata),
            Self::InputObject(t) => Some(&mut t.metadata),
            Self::Interface(t) => Some(&mut t.0.metadata),
            Self::Object(t) => Some(&mut t.0.metadata),
            Self::Scalar(t) => Some(&mut t.metadata),
            Self::Union(t) => Some(&mut t.metadata),
        }
    }

    pub(crate) fn fields_mut(
        &mut self,
    ) -> Option<&mut IndexMap<String, FieldDefinition<TType>>> {
        match self {
            Self::Interface(t) => Some(&mut t.0.fields),
            Self::Object(t) => Some(&mut t.0.fields),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}

impl DerefByName for GraphQLType {
    type Source = Schema;
    type RefLocation = SourceLocation;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        schema
            .type_named(name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}

impl TypeDefinition {
    /// Resolves every type reference this definition makes. Types it refers
    /// to are resolved (and cached) through `registry` as a side effect.
    pub(crate) fn resolve(
        &self,
        registry: &mut TypeRegistry<'_>,
    ) -> Result<GraphQLType, SchemaBuildError> {
        Ok(match self {
            Self::Bool => GraphQLType::Bool,
            Self::Float => GraphQLType::Float,
            Self::ID => GraphQLType::ID,
            Self::Int => GraphQLType::Int,
            Self::String => GraphQLType::String,
            Self::Enum(enum_type) => GraphQLType::Enum(enum_type.clone()),
            Self::Scalar(scalar_type) => GraphQLType::Scalar(scalar_type.clone()),

            Self::InputObject(input_type) => {
                let mut fields = IndexMap::with_capacity(input_type.fields.len());
                for (field_name, field_def) in &input_type.fields {
                    fields.insert(
                        field_name.clone(),
                        field_def.resolve(registry, &input_type.name)?,
                    );
                }
                GraphQLType::InputObject(InputObjectType {
                    description: input_type.description.clone(),
                    directives: input_type.directives.clone(),
                    fields,
                    location: input_type.location.to_owned(),
                    metadata: input_type.metadata.clone(),
                    name: input_type.name.clone(),
                })
            },

            Self::Interface(iface_type) =>
                GraphQLType::Interface(InterfaceType(iface_type.0.resolve(registry)?)),

            Self::Object(obj_type) =>
                GraphQLType::Object(ObjectType(obj_type.0.resolve(registry)?)),

            Self::Union(union_type) => {
                // https://spec.graphql.org/October2021/#sec-Unions.Type-Validation
                for member in &union_type.members {
                    let resolved = registry.resolve_named(member)?;
                    if resolved.kind() != GraphQLTypeKind::Object {
                        return Err(SchemaBuildError::NonObjectUnionMember {
                            union_name: union_type.name.clone(),
                            member_name: member.name().to_string(),
                            location: member.ref_location().to_owned(),
                        });
                    }
                }
                GraphQLType::Union(union_type.clone())
            },
        })
    }
}
