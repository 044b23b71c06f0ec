use libgql_parser::ast;

/// The kind of an [`OperationDefinition`](crate::operation::OperationDefinition),
/// which also selects the schema's root operation type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::convert::From<ast::OperationKind> for OperationKind {
    fn from(value: ast::OperationKind) -> Self {
        match value {
            ast::OperationKind::Mutation => Self::Mutation,
            ast::OperationKind::Query => Self::Query,
            ast::OperationKind::Subscription => Self::Subscription,
        }
    }
}
