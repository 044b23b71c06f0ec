use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::ArgumentDefinition;
use crate::types::DeprecationState;
use crate::types::ResolvedType;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// A field of an object or interface type.
///
/// Generic over the type-reference phase: `FieldDefinition<TypeRef>` as
/// written in SDL, `FieldDefinition<ResolvedType>` once part of a
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<TType = ResolvedType> {
    pub(crate) arguments: IndexMap<String, ArgumentDefinition<TType>>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) field_type: TType,
    pub(crate) location: SourceLocation,
    pub(crate) metadata: Metadata,
    pub(crate) name: String,
}
impl<TType> FieldDefinition<TType> {
    pub fn argument(&self, name: &str) -> Option<&ArgumentDefinition<TType>> {
        self.arguments.get(name)
    }

    /// Arguments in definition order.
    pub fn arguments(&self) -> &IndexMap<String, ArgumentDefinition<TType>> {
        &self.arguments
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field_type(&self) -> &TType {
        &self.field_type
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
impl FieldDefinition<TypeRef> {
    pub(crate) fn resolve(
        &self,
        registry: &mut TypeRegistry<'_>,
        type_name: &str,
    ) -> Result<FieldDefinition, SchemaBuildError> {
        let owner = format!("{type_name}.{}", self.name);
        let mut arguments = IndexMap::with_capacity(self.arguments.len());
        for (arg_name, arg_def) in &self.arguments {
            arguments.insert(arg_name.clone(), arg_def.resolve(registry, &owner)?);
        }

        let field_type = registry.resolve(&self.field_type)?;

        // https://spec.graphql.org/October2021/#sec-Objects.Type-Validation
        if !field_type.is_output_type() {
            return Err(SchemaBuildError::NonOutputFieldType {
                type_name: type_name.to_string(),
                field_name: self.name.clone(),
                field_type: field_type.to_string(),
                location: self.location.to_owned(),
            });
        }

        Ok(FieldDefinition {
            arguments,
            description: self.description.clone(),
            directives: self.directives.clone(),
            field_type,
            location: self.location.to_owned(),
            metadata: self.metadata.clone(),
            name: self.name.clone(),
        })
    }
}
