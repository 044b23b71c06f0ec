use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::types::FieldDefinition;
use crate::types::NamedTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ResolvedType;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType<TType = ResolvedType>(pub(crate) ObjectOrInterfaceTypeData<TType>);

#[inherent]
impl<TType> ObjectOrInterfaceTypeTrait<TType> for ObjectType<TType> {
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Directive annotations in the order written, followed by those added
    /// by extensions.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition<TType>> {
        self.0.field(name)
    }

    /// A map from field name to [`FieldDefinition`], in definition order
    /// (extension fields last).
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition<TType>> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn interfaces(&self) -> &Vec<NamedTypeRef> {
        self.0.interfaces()
    }

    pub fn location(&self) -> &SourceLocation {
        self.0.location()
    }

    pub fn metadata(&self) -> &Metadata {
        self.0.metadata()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
