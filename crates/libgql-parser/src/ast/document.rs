use crate::ast::ast_node::impl_ast_node;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::GraphQLSourceSpan;

/// The root of a parsed GraphQL document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub span: GraphQLSourceSpan,
    pub definitions: Vec<Definition<'src>>,
}

impl<'src> Document<'src> {
    /// Iterates over the executable definitions (operations and fragments).
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|def| def.is_executable())
    }

    /// Iterates over the type-system definitions and extensions.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }
}

/// A top-level definition in a document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    DirectiveDefinition(DirectiveDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    Operation(OperationDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeDefinition(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
}

impl Definition<'_> {
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Fragment(_) | Definition::Operation(_))
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Definition::DirectiveDefinition(def) => &def.span,
            Definition::Fragment(def) => &def.span,
            Definition::Operation(def) => &def.span,
            Definition::SchemaDefinition(def) => &def.span,
            Definition::SchemaExtension(def) => &def.span,
            Definition::TypeDefinition(def) => def.span(),
            Definition::TypeExtension(def) => def.span(),
        }
    }
}

impl_ast_node!(Document<'_>);
