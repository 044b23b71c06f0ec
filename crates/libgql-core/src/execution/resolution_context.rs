use crate::GPath;
use crate::execution::Arguments;
use crate::execution::ResolverError;
use crate::execution::ResolverInfo;
use crate::execution::field_resolver::FieldResolver;
use crate::execution::field_resolver::default_resolve;
use crate::operation::FieldSelection;
use crate::schema::Schema;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Everything a [`FieldResolver`] may inspect about the field it is
/// resolving, plus the cursor into the field's
/// [`ResolverChain`](crate::execution::ResolverChain).
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub(crate) arguments: &'a Arguments,
    pub(crate) chain: &'a [Arc<dyn FieldResolver>],
    pub(crate) chain_index: usize,
    pub(crate) field_definition: &'a FieldDefinition,
    pub(crate) fields: &'a [&'a FieldSelection],
    pub(crate) parent_type: &'a ObjectType,
    pub(crate) parent_value: &'a JsonValue,
    pub(crate) path: &'a GPath,
    pub(crate) schema: &'a Schema,
    pub(crate) variables: &'a JsonMap<String, JsonValue>,
}
impl<'a> ResolutionContext<'a> {
    pub fn arguments(&self) -> &'a Arguments {
        self.arguments
    }

    /// Runs the rest of the resolver chain, or the default property
    /// resolver once the chain is exhausted.
    pub async fn call_next(&self) -> Result<JsonValue, ResolverError> {
        let next = Self {
            chain_index: self.chain_index + 1,
            ..*self
        };
        next.invoke().await
    }

    pub fn field_definition(&self) -> &'a FieldDefinition {
        self.field_definition
    }

    pub fn field_name(&self) -> &'a str {
        self.field_definition.name()
    }

    /// Every selection of this field merged under one response key, in
    /// document order. Never empty.
    pub fn field_selections(&self) -> &'a [&'a FieldSelection] {
        self.fields
    }

    pub fn info(&self) -> ResolverInfo {
        ResolverInfo {
            field_name: self.field_name().to_string(),
            parent_type_name: self.parent_type.name().to_string(),
            path: self.path.clone(),
            response_key: self.response_key().to_string(),
        }
    }

    /// The concrete object type whose field is being resolved.
    pub fn parent_type(&self) -> &'a ObjectType {
        self.parent_type
    }

    pub fn parent_value(&self) -> &'a JsonValue {
        self.parent_value
    }

    pub fn path(&self) -> &'a GPath {
        self.path
    }

    pub fn response_key(&self) -> &'a str {
        self.fields
            .first()
            .map(|field| field.response_key())
            .unwrap_or_else(|| self.field_name())
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// The operation's coerced variable values.
    pub fn variables(&self) -> &'a JsonMap<String, JsonValue> {
        self.variables
    }

    pub(crate) async fn invoke(&self) -> Result<JsonValue, ResolverError> {
        match self.chain.get(self.chain_index) {
            Some(resolver) => {
                tracing::trace!(
                    path = %self.path,
                    chain_index = self.chain_index,
                    "invoking field resolver",
                );
                resolver.resolve(self.parent_value, self.arguments, self).await
            },
            None => Ok(default_resolve(self.parent_value, self.field_name())),
        }
    }
}
impl std::fmt::Debug for ResolutionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("parent_type", &self.parent_type.name())
            .field("field_name", &self.field_name())
            .field("path", &self.path)
            .field("chain_index", &self.chain_index)
            .finish()
    }
}
