use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;

/// A resolved reference to a named type: its name plus its kind, which is
/// known without dereferencing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamedGraphQLTypeRef {
    kind: GraphQLTypeKind,
    name: String,
}
impl NamedGraphQLTypeRef {
    pub fn new(name: impl Into<String>, kind: GraphQLTypeKind) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn deref<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        schema
            .type_named(&self.name)
            .ok_or_else(|| DerefByNameError::DanglingReference(self.name.clone()))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A fully resolved, possibly wrapped, type such as `[User!]!`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ResolvedType {
    List(Box<ResolvedType>),
    Named(NamedGraphQLTypeRef),
    NonNull(Box<ResolvedType>),
}
impl ResolvedType {
    pub fn named(name: impl Into<String>, kind: GraphQLTypeKind) -> Self {
        Self::Named(NamedGraphQLTypeRef::new(name, kind))
    }

    pub fn list(inner: ResolvedType) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: ResolvedType) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            _ => Self::NonNull(Box::new(inner)),
        }
    }

    /// The named type at the bottom of any list/non-null wrapping.
    pub fn named_type(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
            Self::Named(named) => named,
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.named_type().kind()
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// `true` for a list type, looking through one level of non-null.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), Self::List(_))
    }

    /// This type with any outer non-null wrapper removed.
    pub fn nullable(&self) -> &ResolvedType {
        match self {
            Self::NonNull(inner) => inner,
            _ => self,
        }
    }

    /// The element type of a (possibly non-null) list type.
    pub fn list_item_type(&self) -> Option<&ResolvedType> {
        match self.nullable() {
            Self::List(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn is_input_type(&self) -> bool {
        self.kind().is_input()
    }

    pub fn is_output_type(&self) -> bool {
        self.kind().is_output()
    }

    /// Whether a field of this type may stand in for a field of type `other`
    /// when implementing an interface.
    ///
    /// https://spec.graphql.org/October2021/#IsValidImplementationFieldType()
    pub fn is_subtype_of(&self, schema: &Schema, other: &ResolvedType) -> bool {
        self.is_subtype_of_impl(schema.types(), other)
    }

    pub(crate) fn is_subtype_of_impl(
        &self,
        types_map: &IndexMap<String, GraphQLType>,
        other: &ResolvedType,
    ) -> bool {
        match (self, other) {
            (Self::NonNull(self_inner), Self::NonNull(other_inner)) =>
                self_inner.is_subtype_of_impl(types_map, other_inner),
            (Self::NonNull(self_inner), _) =>
                self_inner.is_subtype_of_impl(types_map, other),
            (Self::List(self_inner), Self::List(other_inner)) =>
                self_inner.is_subtype_of_impl(types_map, other_inner),
            (Self::Named(self_named), Self::Named(other_named)) => {
                if self_named.name() == other_named.name() {
                    return true;
                }
                possible_type_names(types_map, other_named.name())
                    .contains(&self_named.name())
            },
            _ => false,
        }
    }
}
impl std::fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(named) => write!(f, "{}", named.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// The names of every type that may appear where `abstract_name` is
/// expected: a union's members, or the objects and interfaces that
/// implement an interface. Empty for any other kind of type.
pub(crate) fn possible_type_names<'a>(
    types_map: &'a IndexMap<String, GraphQLType>,
    abstract_name: &str,
) -> Vec<&'a str> {
    match types_map.get(abstract_name) {
        Some(GraphQLType::Union(union_type)) => union_type.member_names(),
        Some(GraphQLType::Interface(_)) => types_map
            .values()
            .filter(|candidate| match candidate {
                GraphQLType::Object(obj) =>
                    obj.interface_names().contains(&abstract_name),
                GraphQLType::Interface(iface) =>
                    iface.interface_names().contains(&abstract_name),
                _ => false,
            })
            .map(|candidate| candidate.name())
            .collect(),
        _ => vec![],
    }
}
