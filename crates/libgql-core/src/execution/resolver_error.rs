use thiserror::Error;

/// A failure reported by a [`FieldResolver`](crate::execution::FieldResolver).
///
/// The executor turns it into a path-tagged [`GError`](crate::GError) and
/// nulls the field (or its nearest nullable ancestor).
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ResolverError {
    message: String,
}
impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
impl std::convert::From<String> for ResolverError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
impl std::convert::From<&str> for ResolverError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
impl std::convert::From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
