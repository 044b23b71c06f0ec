use crate::GError;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// The result of executing an operation, serializable as the standard
/// GraphQL response: `{"data": ..., "errors": [...]}`.
///
/// `data` is `null` when a null propagated all the way to the root.
/// `errors` is always present, in the order the fields appear in the
/// response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionResponse {
    pub data: JsonValue,
    pub errors: Vec<GError>,
}
impl ExecutionResponse {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
