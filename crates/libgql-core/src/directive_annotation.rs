use crate::Argument;
use crate::loc::SourceLocation;
use crate::Value;
use indexmap::IndexMap;

/// A directive applied to a schema element or document node, e.g.
/// `@deprecated(reason: "use `id`")`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Argument>,
    pub(crate) location: SourceLocation,
    pub(crate) name: String,
    pub(crate) name_location: SourceLocation,
}
impl DirectiveAnnotation {
    /// The value passed for `name`, if any.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name).map(Argument::value)
    }

    /// The arguments in the order they were written. Argument names are
    /// unique within one annotation.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.values()
    }

    /// The location of the `@`.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn name_location(&self) -> &SourceLocation {
        &self.name_location
    }
}
