use crate::AstConversionError;
use crate::loc::SourceLocation;
use crate::Value;
use libgql_parser::ast;

/// A named argument value passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) location: SourceLocation,
    pub(crate) name: String,
    pub(crate) value: Value,
    pub(crate) value_location: SourceLocation,
}
impl Argument {
    pub fn new(name: impl Into<String>, value: Value, location: SourceLocation) -> Self {
        Self {
            value_location: location.clone(),
            location,
            name: name.into(),
            value,
        }
    }

    pub(crate) fn from_ast(arg: &ast::Argument<'_>) -> Result<Self, AstConversionError> {
        Ok(Self {
            location: SourceLocation::from_span(&arg.span),
            name: arg.name.as_str().to_string(),
            value: Value::from_ast(&arg.value)?,
            value_location: SourceLocation::from_span(arg.value.span()),
        })
    }

    /// Where the argument's name was written.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_location(&self) -> &SourceLocation {
        &self.value_location
    }
}
