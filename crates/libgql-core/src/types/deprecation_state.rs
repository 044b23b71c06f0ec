use crate::DirectiveAnnotation;
use crate::Value;

/// The reason `@deprecated` reports when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Whether a schema element carries `@deprecated`, and why.
#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl DeprecationState<'_> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => Some(reason),
            Self::NotDeprecated => None,
        }
    }
}
impl<'a> std::convert::From<&'a Vec<DirectiveAnnotation>> for DeprecationState<'a> {
    fn from(directives: &'a Vec<DirectiveAnnotation>) -> Self {
        directives
            .iter()
            .find(|annot| annot.name() == "deprecated")
            .map(|annot| match annot.argument("reason") {
                Some(Value::String(reason)) => Self::Deprecated(reason.as_str()),
                _ => Self::Deprecated(DEFAULT_DEPRECATION_REASON),
            })
            .unwrap_or(Self::NotDeprecated)
    }
}
