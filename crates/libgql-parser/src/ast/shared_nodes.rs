use crate::ast::ast_node::impl_ast_node;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use std::borrow::Cow;

// =========================================================
// Names
// =========================================================

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names)
/// (identifier).
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more. `value` borrows from the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub span: GraphQLSourceSpan,
    pub value: Cow<'src, str>,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// =========================================================
// Arguments and directive annotations
// =========================================================

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

/// A directive applied to some location (e.g. `@include(if: $flag)`).
///
/// `span` starts at the `@`; `name.span` covers just the directive name.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
}

// =========================================================
// Field definitions (used in object types, interfaces)
// =========================================================

/// A field definition within an object type or interface type.
///
/// See
/// [Field Definitions](https://spec.graphql.org/October2021/#FieldsDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: TypeAnnotation<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

// =========================================================
// Input value definitions (arguments, input fields)
// =========================================================

/// An input value definition, used for field arguments, directive
/// arguments, and input object fields.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub value_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

// =========================================================
// Enum value definitions
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

impl_ast_node!(
    Argument<'_>,
    DirectiveAnnotation<'_>,
    EnumValueDefinition<'_>,
    FieldDefinition<'_>,
    InputValueDefinition<'_>,
    Name<'_>,
);
