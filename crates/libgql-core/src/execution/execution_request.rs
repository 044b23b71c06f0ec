use crate::operation::Document;
use crate::schema::Schema;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Everything needed to execute one operation.
///
/// The document should already have passed
/// [`validate()`](crate::validate) against the same schema.
#[derive(Clone, Debug)]
pub struct ExecutionRequest {
    pub document: Arc<Document>,
    /// Which operation to run. May be omitted when the document contains
    /// exactly one.
    pub operation_name: Option<String>,
    /// The value passed as `parent` to the root fields' resolvers.
    pub root_value: JsonValue,
    pub schema: Arc<Schema>,
    /// Raw variable values, coerced against the operation's variable
    /// definitions before execution starts.
    pub variables: JsonMap<String, JsonValue>,
}
impl ExecutionRequest {
    /// A request for the document's only operation with no variables and
    /// an empty root object.
    pub fn new(schema: Arc<Schema>, document: Arc<Document>) -> Self {
        Self {
            document,
            operation_name: None,
            root_value: JsonValue::Object(JsonMap::new()),
            schema,
            variables: JsonMap::new(),
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_root_value(mut self, root_value: JsonValue) -> Self {
        self.root_value = root_value;
        self
    }

    pub fn with_variables(mut self, variables: JsonMap<String, JsonValue>) -> Self {
        self.variables = variables;
        self
    }
}
