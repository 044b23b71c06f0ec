use crate::Argument;
use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::operation::SelectionSet;

/// A field selected in a document, e.g. `smallPic: profilePic(size: 64)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) location: SourceLocation,
    pub(crate) name: String,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The first argument written with this name.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    /// Arguments in the order they were written. Names are not guaranteed
    /// to be unique until the document is validated.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    /// The location of the alias, or of the name when there is no alias.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
