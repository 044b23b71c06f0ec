use crate::ast::ast_node::impl_ast_node;
use crate::ast::DirectiveAnnotation;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::RootOperationTypeDefinition;
use crate::GraphQLSourceSpan;

/// `extend schema ...`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub root_operations: Vec<RootOperationTypeDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Scalar(ScalarTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
}

impl<'src> TypeExtension<'src> {
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeExtension::Enum(ext) => &ext.span,
            TypeExtension::InputObject(ext) => &ext.span,
            TypeExtension::Interface(ext) => &ext.span,
            TypeExtension::Object(ext) => &ext.span,
            TypeExtension::Scalar(ext) => &ext.span,
            TypeExtension::Union(ext) => &ext.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub members: Vec<Name<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

impl_ast_node!(
    EnumTypeExtension<'_>,
    InputObjectTypeExtension<'_>,
    InterfaceTypeExtension<'_>,
    ObjectTypeExtension<'_>,
    ScalarTypeExtension<'_>,
    SchemaExtension<'_>,
    UnionTypeExtension<'_>,
);
