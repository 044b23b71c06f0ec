use crate::ReservedNameContext;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` field of `GraphQLParseError`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The parser encountered a `GraphQLTokenKind::Error` token from the
    /// lexer. The lexer's message and notes are preserved on the parent
    /// `GraphQLParseError`.
    #[error("lexer error")]
    LexerError,

    /// A delimiter was opened but EOF was reached before the matching
    /// closing delimiter. The opening location is included in the error's
    /// notes.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A literal could not be converted (e.g. an integer that overflows
    /// 64 bits).
    #[error("invalid value")]
    InvalidValue,

    /// Reserved name used in a context where it's not allowed.
    ///
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// Certain constructs cannot be empty: selection sets, argument lists,
    /// variable definition lists, and `|`-delimited member lists.
    ///
    /// ```text
    /// query { user { } }
    ///              ^^^ selection set cannot be empty
    /// ```
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// A catch-all for syntax errors without dedicated variants. The
    /// specific error is described in `GraphQLParseError::message()`.
    #[error("invalid syntax")]
    InvalidSyntax,
}
