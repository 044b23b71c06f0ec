use crate::ast::ast_node::impl_ast_node;
use crate::ast::Name;
use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// A GraphQL input value literal.
///
/// See
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Boolean(BooleanValue),
    Enum(EnumValue<'src>),
    Float(FloatValue<'src>),
    Int(IntValue<'src>),
    List(ListValue<'src>),
    Null(NullValue),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(VariableValue<'src>),
}

impl Value<'_> {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Value::Boolean(v) => &v.span,
            Value::Enum(v) => &v.span,
            Value::Float(v) => &v.span,
            Value::Int(v) => &v.span,
            Value::List(v) => &v.span,
            Value::Null(v) => &v.span,
            Value::Object(v) => &v.span,
            Value::String(v) => &v.span,
            Value::Variable(v) => &v.span,
        }
    }
}

/// An integer literal. The raw token text is retained; conversion to a
/// host integer happens when the domain model is built.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub raw: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

/// A float literal, retained as raw token text.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub raw: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

/// A string literal (quoted or block).
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    /// Raw token text including quotes.
    pub raw: Cow<'src, str>,
    /// Cooked content with escapes processed (and block string indentation
    /// removed).
    pub value: String,
    pub is_block: bool,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

/// A variable reference (`$name`). Rejected by the parser in const
/// contexts.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableValue<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A single `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: GraphQLSourceSpan,
}

impl_ast_node!(
    BooleanValue,
    EnumValue<'_>,
    FloatValue<'_>,
    IntValue<'_>,
    ListValue<'_>,
    NullValue,
    ObjectField<'_>,
    ObjectValue<'_>,
    StringValue<'_>,
    VariableValue<'_>,
);
