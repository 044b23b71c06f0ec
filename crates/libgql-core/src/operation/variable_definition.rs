use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::types::TypeRef;
use crate::Value;

/// `$name: Type = default` in an operation's variable list.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) location: SourceLocation,
    pub(crate) name: String,
    pub(crate) var_type: TypeRef,
}
impl VariableDefinition {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    /// The location of the `$`.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The variable's name without its `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn var_type(&self) -> &TypeRef {
        &self.var_type
    }
}
