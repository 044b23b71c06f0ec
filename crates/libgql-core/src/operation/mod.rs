mod document;
mod document_builder;
mod field_selection;
mod fragment_definition;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod variable_definition;

pub use document::Document;
pub use document::TypeSystemDefinitionRef;
pub use document_builder::DocumentBuildError;
pub use document_builder::DocumentBuilder;
pub use field_selection::FieldSelection;
pub use fragment_definition::FragmentDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::FragmentSpreadSelection;
pub use selection::InlineFragmentSelection;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
