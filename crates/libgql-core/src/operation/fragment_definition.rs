use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::operation::SelectionSet;
use crate::types::NamedTypeRef;

/// `fragment Name on Type { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) location: SourceLocation,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: NamedTypeRef,
}
impl FragmentDefinition {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &NamedTypeRef {
        &self.type_condition
    }
}
