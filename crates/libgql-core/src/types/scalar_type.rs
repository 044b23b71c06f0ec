use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::Value;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema). The five built-in scalars
/// have their own [`GraphQLType`](crate::types::GraphQLType) variants.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) location: SourceLocation,
    pub(crate) metadata: Metadata,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
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

    /// The `url` given to `@specifiedBy`, if any.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.directives
            .iter()
            .find(|annot| annot.name() == "specifiedBy")
            .and_then(|annot| match annot.argument("url") {
                Some(Value::String(url)) => Some(url.as_str()),
                _ => None,
            })
    }
}
