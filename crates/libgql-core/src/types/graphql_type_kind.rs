use crate::types::GraphQLType;

/// Similar to [`GraphQLType`] except without the corresponding type data.
/// Useful when representing a group or category of [`GraphQLType`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "InputObject",
            Self::Int => "Int",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::String => "String",
            Self::Union => "Union",
        }
    }

    /// The `__TypeKind` enum value reported by introspection.
    pub fn introspection_kind(&self) -> &'static str {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::Scalar
            | Self::String => "SCALAR",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Object => "OBJECT",
            Self::Union => "UNION",
        }
    }

    /// Interfaces and unions.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }

    /// Objects, interfaces, and unions: the types that take a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// https://spec.graphql.org/October2021/#IsInputType()
    pub fn is_input(&self) -> bool {
        !matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// Scalars and enums.
    pub fn is_leaf(&self) -> bool {
        !matches!(
            self,
            Self::InputObject | Self::Interface | Self::Object | Self::Union,
        )
    }

    /// https://spec.graphql.org/October2021/#IsOutputType()
    pub fn is_output(&self) -> bool {
        !matches!(self, Self::InputObject)
    }
}
impl<TType> std::convert::From<&GraphQLType<TType>> for GraphQLTypeKind {
    fn from(value: &GraphQLType<TType>) -> Self {
        match value {
            GraphQLType::Bool => GraphQLTypeKind::Bool,
            GraphQLType::Enum(_) => GraphQLTypeKind::Enum,
            GraphQLType::Float => GraphQLTypeKind::Float,
            GraphQLType::ID => GraphQLTypeKind::ID,
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Int => GraphQLTypeKind::Int,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Scalar(_) => GraphQLTypeKind::Scalar,
            GraphQLType::String => GraphQLTypeKind::String,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
