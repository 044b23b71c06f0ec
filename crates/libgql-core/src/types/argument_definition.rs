use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::DeprecationState;
use crate::types::ResolvedType;
use crate::types::TypeRef;
use crate::Value;

/// An argument of a field or directive, or a field of an input object type.
///
/// Generic over the type-reference phase: `ArgumentDefinition<TypeRef>` as
/// written in SDL, `ArgumentDefinition<ResolvedType>` once part of a
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition<TType = ResolvedType> {
    pub(crate) arg_type: TType,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) location: SourceLocation,
    pub(crate) metadata: Metadata,
    pub(crate) name: String,
}
impl<TType> ArgumentDefinition<TType> {
    pub fn arg_type(&self) -> &TType {
        &self.arg_type
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
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
impl ArgumentDefinition<ResolvedType> {
    /// A non-null argument without a default must always be provided.
    pub fn is_required(&self) -> bool {
        self.arg_type.is_non_null() && self.default_value.is_none()
    }
}
impl ArgumentDefinition<TypeRef> {
    /// `owner` names the field, directive, or input object this argument
    /// belongs to, for error messages.
    pub(crate) fn resolve(
        &self,
        registry: &mut TypeRegistry<'_>,
        owner: &str,
    ) -> Result<ArgumentDefinition, SchemaBuildError> {
        let arg_type = registry.resolve(&self.arg_type)?;

        // https://spec.graphql.org/October2021/#sec-Field-Arguments
        if !arg_type.is_input_type() {
            return Err(SchemaBuildError::NonInputArgumentType {
                owner: owner.to_string(),
                argument_name: self.name.clone(),
                arg_type: arg_type.to_string(),
                location: self.location.to_owned(),
            });
        }

        Ok(ArgumentDefinition {
            arg_type,
            default_value: self.default_value.clone(),
            description: self.description.clone(),
            directives: self.directives.clone(),
            location: self.location.to_owned(),
            metadata: self.metadata.clone(),
            name: self.name.clone(),
        })
    }
}
