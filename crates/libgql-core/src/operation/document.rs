use crate::loc::SourceLocation;
use crate::operation::DocumentBuildError;
use crate::operation::DocumentBuilder;
use crate::operation::FragmentDefinition;
use crate::operation::OperationDefinition;
use crate::schema::Schema;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::Arc;

/// A type-system definition or extension that appeared in an executable
/// document, kept so validation can report it.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeSystemDefinitionRef {
    pub(crate) location: SourceLocation,
    pub(crate) name: Option<String>,
}
impl TypeSystemDefinitionRef {
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The defined type or directive name; `None` for `schema` definitions
    /// and extensions.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// The domain form of an executable GraphQL document: its operations and
/// its fragments.
///
/// A `Document` has not been checked against any schema. Run it through
/// [`validate()`](crate::validate) before executing it.
///
/// ```rust
/// use libgql_core::operation::Document;
///
/// let doc = Document::parse("query Q { me { ...UserFields } } \
///     fragment UserFields on User { name }", None).unwrap();
/// assert_eq!(doc.operations().len(), 1);
/// assert!(doc.fragment("UserFields").is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub(crate) fragments: IndexMap<String, FragmentDefinition>,
    pub(crate) operations: Vec<OperationDefinition>,
    pub(crate) schema: Option<Arc<Schema>>,
    pub(crate) type_system_definitions: Vec<TypeSystemDefinitionRef>,
}
impl Document {
    /// Parses and builds a document. `source_path` names the source in
    /// error locations.
    pub fn parse(source: &str, source_path: Option<&Path>) -> Result<Self, DocumentBuildError> {
        let mut builder = DocumentBuilder::new();
        builder.load_str(source_path, source)?;
        builder.build()
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.get(name)
    }

    /// Fragments in definition order.
    pub fn fragments(&self) -> &IndexMap<String, FragmentDefinition> {
        &self.fragments
    }

    /// The operation named `name`, or the document's only operation when
    /// `name` is `None`.
    pub fn operation(&self, name: Option<&str>) -> Option<&OperationDefinition> {
        match name {
            Some(name) => self.operations.iter().find(|op| op.name() == Some(name)),
            None if self.operations.len() == 1 => self.operations.first(),
            None => None,
        }
    }

    /// Operations in definition order.
    pub fn operations(&self) -> &[OperationDefinition] {
        &self.operations
    }

    /// The schema built from type-system definitions written in the same
    /// source as the operations, if there were any.
    pub fn schema(&self) -> Option<&Arc<Schema>> {
        self.schema.as_ref()
    }

    pub fn type_system_definitions(&self) -> &[TypeSystemDefinitionRef] {
        &self.type_system_definitions
    }
}
