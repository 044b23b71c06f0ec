use crate::GError;
use crate::operation::OperationKind;

/// A request-level failure: raised before any field resolves, so there is
/// no partial result.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExecutionError {
    #[error("The document does not contain any operations.")]
    NoOperations,

    #[error("Schema does not define a {0} root type.")]
    MissingRootType(OperationKind),

    #[error("Must provide an operation name when the document contains multiple operations.")]
    OperationNameRequired,

    #[error("Unknown operation named '{0}'.")]
    UnknownOperationName(String),

    #[error("{}", join_messages(.0))]
    VariableCoercion(Vec<GError>),
}
impl ExecutionError {
    /// This failure as response errors.
    pub fn errors(&self) -> Vec<GError> {
        match self {
            Self::VariableCoercion(errors) => errors.clone(),
            _ => vec![GError::new(self.to_string())],
        }
    }
}

fn join_messages(errors: &[GError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
