use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::types::ArgumentDefinition;
use crate::types::ResolvedType;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
///
/// Input fields share their representation with arguments: a name, an input
/// type, and an optional default value.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType<TType = ResolvedType> {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, ArgumentDefinition<TType>>,
    pub(crate) location: SourceLocation,
    pub(crate) metadata: Metadata,
    pub(crate) name: String,
}
impl<TType> InputObjectType<TType> {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&ArgumentDefinition<TType>> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, ArgumentDefinition<TType>> {
        &self.fields
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
