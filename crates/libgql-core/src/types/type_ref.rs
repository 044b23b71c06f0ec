use crate::loc::SourceLocation;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use libgql_parser::ast;

/// A by-name reference to a [`GraphQLType`], carrying the location where
/// the name was written.
pub type NamedTypeRef = NamedRef<Schema, SourceLocation, GraphQLType>;

/// An unresolved type reference such as `[User!]!`, as written in a schema
/// or variable definition. The named types it mentions may not exist yet;
/// [`TypeRegistry`](crate::schema::TypeRegistry) turns it into a
/// [`ResolvedType`](crate::types::ResolvedType).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(NamedTypeRef),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    pub fn named(name: impl AsRef<str>, location: SourceLocation) -> Self {
        Self::Named(NamedTypeRef::new(name, location))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps `inner` as non-null. `inner` must not already be non-null.
    pub fn non_null(inner: TypeRef) -> Result<Self, SchemaBuildError> {
        if let Self::NonNull(_) = inner {
            return Err(SchemaBuildError::DoubleNonNull {
                location: inner.location().to_owned(),
                type_ref: inner.to_string(),
            });
        }
        Ok(Self::NonNull(Box::new(inner)))
    }

    pub(crate) fn from_ast(annot: &ast::TypeAnnotation<'_>) -> Self {
        let inner = match annot {
            ast::TypeAnnotation::List(list) =>
                Self::list(Self::from_ast(&list.element_type)),
            ast::TypeAnnotation::Named(named) => Self::named(
                named.name.as_str(),
                SourceLocation::from_span(&named.span),
            ),
        };
        if annot.nullability().is_non_null() {
            Self::NonNull(Box::new(inner))
        } else {
            inner
        }
    }

    /// The name of the named type at the bottom of any list/non-null
    /// wrapping.
    pub fn innermost_name(&self) -> &str {
        self.innermost_named_ref().name()
    }

    pub fn innermost_named_ref(&self) -> &NamedTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_named_ref(),
            Self::Named(named) => named,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.location(),
            Self::Named(named) => named.ref_location(),
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(named) => write!(f, "{}", named.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
