use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::VariableDefinition;

/// A query, mutation, or subscription.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) location: SourceLocation,
    pub(crate) name: Option<String>,
    pub(crate) operation_kind: OperationKind,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variable_definitions: Vec<VariableDefinition>,
}
impl OperationDefinition {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions.iter().find(|var_def| var_def.name() == name)
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        &self.variable_definitions
    }
}
