use crate::ast::ast_node::impl_ast_node;
use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// Whether a type annotation is followed by `!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Nullability {
    Nullable,
    /// Carries the span of the `!` token.
    NonNull(GraphQLSourceSpan),
}

impl Nullability {
    pub fn is_non_null(&self) -> bool {
        matches!(self, Nullability::NonNull(_))
    }
}

/// A type reference as written in source (e.g. `[String!]!`).
///
/// See
/// [Type References](https://spec.graphql.org/October2021/#sec-Type-References)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    List(ListTypeAnnotation<'src>),
    Named(NamedTypeAnnotation<'src>),
}

impl<'src> TypeAnnotation<'src> {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeAnnotation::List(list) => &list.span,
            TypeAnnotation::Named(named) => &named.span,
        }
    }

    pub fn nullability(&self) -> &Nullability {
        match self {
            TypeAnnotation::List(list) => &list.nullability,
            TypeAnnotation::Named(named) => &named.nullability,
        }
    }

    /// The innermost named type of this annotation.
    pub fn innermost_name(&self) -> &Name<'src> {
        match self {
            TypeAnnotation::List(list) => list.element_type.innermost_name(),
            TypeAnnotation::Named(named) => &named.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation<'src> {
    pub name: Name<'src>,
    pub nullability: Nullability,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation<'src> {
    pub element_type: Box<TypeAnnotation<'src>>,
    pub nullability: Nullability,
    pub span: GraphQLSourceSpan,
}

impl_ast_node!(ListTypeAnnotation<'_>, NamedTypeAnnotation<'_>);
