use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::types::FieldDefinition;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// The accessors object and interface types have in common.
pub trait ObjectOrInterfaceTypeTrait<TType> {
    fn description(&self) -> Option<&str>;
    fn directives(&self) -> &Vec<DirectiveAnnotation>;
    fn field(&self, name: &str) -> Option<&FieldDefinition<TType>>;
    fn fields(&self) -> &IndexMap<String, FieldDefinition<TType>>;
    fn interface_names(&self) -> Vec<&str>;
    fn interfaces(&self) -> &Vec<NamedTypeRef>;
    fn location(&self) -> &SourceLocation;
    fn metadata(&self) -> &Metadata;
    fn name(&self) -> &str;
}
