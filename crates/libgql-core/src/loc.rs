use libgql_parser::GraphQLSourceSpan;
use std::path::Path;
use std::path::PathBuf;

/// A 1-based line/column position within a (possibly named) source file.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePosition {
    pub file_path: Option<PathBuf>,
    pub line: usize,
    pub column: usize,
}

/// Where a schema element or document node was defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SourceLocation {
    /// Built-in scalars, directives, and introspection types.
    BuiltIn,
    Source(FilePosition),
}
/// The file name given to the built-in SDL (directives and introspection
/// types). Spans parsed from it become [`SourceLocation::BuiltIn`].
pub(crate) const BUILTIN_SOURCE_NAME: &str = "<graphql built-in>";

impl SourceLocation {
    pub fn from_span(span: &GraphQLSourceSpan) -> Self {
        if span.file_path.as_deref() == Some(Path::new(BUILTIN_SOURCE_NAME)) {
            return Self::BuiltIn;
        }
        Self::Source(FilePosition {
            file_path: span.file_path.clone(),
            line: span.start_inclusive.display_line(),
            column: span.start_inclusive.display_column(),
        })
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::BuiltIn => None,
            Self::Source(pos) => pos.file_path.as_deref(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::BuiltIn)
    }

    /// The line/column pair used in error reports. Built-in locations have
    /// none.
    pub fn error_location(&self) -> Option<crate::ErrorLocation> {
        match self {
            Self::BuiltIn => None,
            Self::Source(pos) => Some(crate::ErrorLocation {
                line: pos.line,
                column: pos.column,
            }),
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuiltIn => write!(f, "<built-in>"),
            Self::Source(FilePosition { file_path: Some(path), line, column }) =>
                write!(f, "{}:{line}:{column}", path.display()),
            Self::Source(FilePosition { file_path: None, line, column }) =>
                write!(f, "{line}:{column}"),
        }
    }
}
