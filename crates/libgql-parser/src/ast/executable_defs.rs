use crate::ast::ast_node::impl_ast_node;
use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

// =========================================================
// Operation definitions
// =========================================================

/// The kind of an operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation definition (query, mutation, or subscription).
///
/// `shorthand` is `true` for the anonymous `{ ... }` query form.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub operation_kind: OperationKind,
    pub shorthand: bool,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
}

// =========================================================
// Fragment definitions
// =========================================================

/// A named fragment definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// `on TypeName`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub span: GraphQLSourceSpan,
    pub named_type: Name<'src>,
}

// =========================================================
// Variable definitions
// =========================================================

/// A variable definition within an operation's variable list (e.g.
/// `$id: ID! = "default"`).
///
/// `variable.span` covers the name without its `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub variable: Name<'src>,
    pub var_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

// =========================================================
// Selection sets
// =========================================================

/// The set of fields and fragments selected within braces `{ ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub span: GraphQLSourceSpan,
    pub selections: Vec<Selection<'src>>,
}

/// A single selection within a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

impl Selection<'_> {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Selection::Field(field) => &field.span,
            Selection::FragmentSpread(spread) => &spread.span,
            Selection::InlineFragment(inline) => &inline.span,
        }
    }
}

/// A field selection, optionally aliased, with arguments, directives, and
/// a nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub span: GraphQLSourceSpan,
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

impl Field<'_> {
    /// The key under which this field appears in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

/// A named fragment spread (`...FragmentName`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// An inline fragment (`... on Type { ... }` or `... { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub span: GraphQLSourceSpan,
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
}

impl_ast_node!(
    Field<'_>,
    FragmentDefinition<'_>,
    FragmentSpread<'_>,
    InlineFragment<'_>,
    OperationDefinition<'_>,
    SelectionSet<'_>,
    TypeCondition<'_>,
    VariableDefinition<'_>,
);
