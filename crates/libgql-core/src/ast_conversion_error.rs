use crate::loc::SourceLocation;

/// Problems found while converting AST literals and directive annotations
/// into the domain model. Both document and schema builders surface these
/// through their own error types.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AstConversionError {
    #[error("argument `{argument_name}` is given more than once to `@{directive_name}`")]
    DuplicateDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: SourceLocation,
    },

    #[error("input object field `{field_name}` is given more than once")]
    DuplicateObjectField {
        field_name: String,
        location: SourceLocation,
    },

    #[error("integer literal `{raw}` does not fit in a 64-bit integer")]
    IntOverflow {
        raw: String,
        location: SourceLocation,
    },

    #[error("invalid float literal `{raw}`")]
    InvalidFloat {
        raw: String,
        location: SourceLocation,
    },
}
